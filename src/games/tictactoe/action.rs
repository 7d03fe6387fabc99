//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Each history entry after the
//! first records the move that produced it.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Zero-based row of the marked cell.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Zero-based column of the marked cell.
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when playing or navigating the history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The selected snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// A jump targeted an index outside the history.
    #[display("History index {} out of range (len {})", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A history invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
