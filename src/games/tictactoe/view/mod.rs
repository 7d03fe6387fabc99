//! Derived view data for the board and move list.
//!
//! Everything here is a pure function of a [`GameHistory`](super::GameHistory)
//! and a [`SortOrder`]. Nothing is cached, so views can never drift from the
//! history they describe.

pub mod board;
pub mod moves;

pub use board::{BoardView, CellView, Status, board_view, cell_views, last_marked, status};
pub use moves::{MoveLabel, SortOrder, move_list};
