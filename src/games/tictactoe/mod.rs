//! Tic-tac-toe with a time-travel move history.

mod action;
mod contracts;
mod history;
mod position;
mod types;

pub mod invariants;
pub mod rules;
pub mod view;

pub use action::{HistoryError, Move};
pub use contracts::{BranchTruncated, Contract, GameUndecided, PlayContract, SquareIsEmpty};
pub use history::{GameHistory, HistoryEntry};
pub use position::Position;
pub use types::{Board, Player, Square};

/// Alias matching the glossary: the symbol a player places.
pub type Mark = Player;
