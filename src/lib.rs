//! Strictly Timetravel - tic-tac-toe with a browsable move history
//!
//! Every play appends an immutable board snapshot to a history log. Any
//! earlier snapshot can be selected again; playing from it discards the
//! snapshots that followed.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a single snapshot
//! - **History**: append-and-truncate snapshot log with a selected ply
//! - **View**: board cells, status line and move labels derived from the history
//! - **TUI**: ratatui front end that turns key presses into plays and jumps
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameHistory, Position, SortOrder, board_view, move_list};
//!
//! let mut history = GameHistory::new();
//! history.play(Position::Center).unwrap();
//! history.play(Position::TopLeft).unwrap();
//! history.jump_to(1).unwrap();
//!
//! assert_eq!(board_view(&history).status.to_string(), "Next player: O");
//! assert_eq!(
//!     move_list(&history, SortOrder::Descending)[1].to_string(),
//!     "You are at move #1 (1, 1)"
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BranchTruncated, Contract, GameHistory, GameUndecided, HistoryEntry, HistoryError,
    Mark, Move, Player, PlayContract, Position, Square, SquareIsEmpty,
};

// Crate-level exports - Rules, invariants and views
pub use games::tictactoe::invariants::{
    AlternatingMarksInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicSnapshotsInvariant, SelectionInRangeInvariant,
};
pub use games::tictactoe::rules::{LINES, Winner, evaluate, is_draw, is_full};
pub use games::tictactoe::view::{
    BoardView, CellView, MoveLabel, SortOrder, Status, board_view, cell_views, last_marked,
    move_list, status,
};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, Input, draw, init_tracing, run_tui};
