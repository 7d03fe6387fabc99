//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board) snapshot. They carry
//! no turn or history state, so any snapshot in the history can be judged.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Winner, evaluate};
