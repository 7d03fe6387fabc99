//! Keyboard navigation helpers.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Moves the board cursor one cell in the arrow's direction.
///
/// The cursor stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}

/// Maps `1`-`9` to the board position with that number, row-major.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}
