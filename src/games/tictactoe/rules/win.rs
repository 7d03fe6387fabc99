//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
///
/// Rows first, then columns, then the two diagonals. When a board holds more
/// than one complete line, the earliest one here is reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Winner {
    /// Owner of the line.
    pub player: Player,
    /// The three positions forming the line.
    pub line: [Position; 3],
}

impl Winner {
    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }

    /// Board indices of the winning line.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Evaluates a board for a completed line.
///
/// Returns the first uniform, non-empty line in [`LINES`] order, or `None`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Winner> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(Winner { player, line })
            }
            _ => None,
        }
    })
}
