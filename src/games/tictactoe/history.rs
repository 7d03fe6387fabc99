//! Time-travel move history for tic-tac-toe.
//!
//! [`GameHistory`] is an append-and-truncate log of immutable board
//! snapshots plus the currently selected ply. Jumping only moves the
//! selection; playing from a past ply discards every later entry before
//! appending the new one.

use super::action::{HistoryError, Move};
use super::contracts::{Contract, PlayContract};
use super::rules::{self, Winner};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A board snapshot and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub(super) board: Board,
    pub(super) last_move: Option<Move>,
}

impl HistoryEntry {
    /// The entry every game starts from: an empty board and no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Returns the snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this snapshot, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

/// Ordered log of snapshots with a selected position.
///
/// Entry `i` is the board after ply `i`; entry 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    pub(super) entries: Vec<HistoryEntry>,
    pub(super) selected: usize,
}

// The initial entry can never be removed, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl GameHistory {
    /// Creates a history holding only the initial empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
            selected: 0,
        }
    }

    /// Replays `positions` from the empty board.
    ///
    /// Stops with the first rejected play.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, HistoryError> {
        let mut history = Self::new();
        for pos in positions {
            history.play(*pos)?;
        }
        Ok(history)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries (plies played + 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Index of the selected entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected entry.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.selected]
    }

    /// The selected snapshot.
    pub fn current_board(&self) -> &Board {
        self.current().board()
    }

    /// Player who would mark the next cell from the selected snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_ply(self.selected)
    }

    /// Winner of the selected snapshot, if any.
    pub fn winner(&self) -> Option<Winner> {
        rules::evaluate(self.current_board())
    }

    /// True when the selected snapshot is won or drawn.
    pub fn is_decided(&self) -> bool {
        self.winner().is_some() || rules::is_full(self.current_board())
    }

    /// Marks `pos` for the player to move at the selected ply.
    ///
    /// Any entries after the selected one are discarded first, and the new
    /// entry becomes the selection. Rejected plays leave the history
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`HistoryError::GameOver`] if the selected snapshot has a winner.
    /// - [`HistoryError::SquareOccupied`] if `pos` is taken (this includes
    ///   every cell of a drawn board).
    #[instrument(skip(self), fields(selected = self.selected, len = self.entries.len()))]
    pub fn play(&mut self, pos: Position) -> Result<(), HistoryError> {
        let mov = Move::new(self.next_player(), pos);
        PlayContract::pre(self, &mov)?;

        // Staged on a copy so a failed postcondition leaves `self` untouched.
        let mut next = self.clone();
        let board = next.current_board().with_mark(pos, mov.player);
        let dropped = next.entries.len() - (next.selected + 1);
        next.entries.truncate(next.selected + 1);
        next.entries.push(HistoryEntry {
            board,
            last_move: Some(mov),
        });
        next.selected = next.entries.len() - 1;

        #[cfg(debug_assertions)]
        PlayContract::post(self, &next)?;

        *self = next;
        if dropped > 0 {
            debug!(dropped, "Discarded future entries");
        }
        info!(player = %mov.player, position = %pos, ply = self.selected, "Mark placed");
        debug!(board = %board.display(), "Snapshot appended");

        Ok(())
    }

    /// Selects the entry at `index` without touching the log.
    ///
    /// # Errors
    ///
    /// [`HistoryError::OutOfRange`] if `index >= len()`.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.entries.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.selected = index;
        info!(index, "Jumped in history");
        Ok(())
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
