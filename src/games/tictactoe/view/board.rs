//! Per-cell render data and the status line.

use super::super::rules::{self, Winner};
use super::super::{Board, GameHistory, Player, Position, Square};
use derive_more::Display;
use tracing::instrument;

/// Render descriptor for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Where the cell sits.
    pub position: Position,
    /// What the cell holds.
    pub square: Square,
    /// Part of the winning line.
    pub is_winning: bool,
    /// Marked by the move that produced the selected snapshot.
    pub is_last_marked: bool,
}

/// Game status line for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// A player owns a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Full board, no line.
    #[display("Result: Draw")]
    Draw,
    /// Game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// True for wins and draws.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// Everything needed to draw the board for the selected ply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Cells in row-major order.
    pub cells: [CellView; 9],
    /// Status line.
    pub status: Status,
    /// Winning line, if any.
    pub winner: Option<Winner>,
}

impl BoardView {
    /// Cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }
}

/// Builds cell descriptors from a snapshot, its evaluation and the last mark.
pub fn cell_views(
    board: &Board,
    winner: Option<&Winner>,
    last_marked: Option<Position>,
) -> [CellView; 9] {
    Position::ALL.map(|position| CellView {
        position,
        square: board.get(position),
        is_winning: winner.is_some_and(|w| w.contains(position)),
        is_last_marked: last_marked == Some(position),
    })
}

/// Status of `board` when `ply` marks have been played.
pub fn status(board: &Board, winner: Option<&Winner>, ply: usize) -> Status {
    match winner {
        Some(w) => Status::Winner(w.player),
        None if rules::is_full(board) => Status::Draw,
        None => Status::NextPlayer(Player::for_ply(ply)),
    }
}

/// Cell marked by the selected entry's move; `None` at game start.
///
/// Both a fresh play and a jump select an entry whose stored move names the
/// same cell, so the marker is always derived from the selection.
pub fn last_marked(history: &GameHistory) -> Option<Position> {
    history.current().last_move().map(|mov| mov.position)
}

/// Builds the full board view for the selected ply.
#[instrument(skip(history), fields(selected = history.selected()))]
pub fn board_view(history: &GameHistory) -> BoardView {
    let board = history.current_board();
    let winner = rules::evaluate(board);
    BoardView {
        cells: cell_views(board, winner.as_ref(), last_marked(history)),
        status: status(board, winner.as_ref(), history.selected()),
        winner,
    }
}
