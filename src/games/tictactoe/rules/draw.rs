//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::evaluate;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A board is drawn when it is full and nobody owns a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn board_of(rows: [&str; 3]) -> Board {
        rows.concat()
            .chars()
            .zip(Position::ALL)
            .fold(Board::new(), |board, (c, pos)| match c {
                'X' => board.with_mark(pos, Player::X),
                'O' => board.with_mark(pos, Player::O),
                _ => board,
            })
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_of(["...", ".X.", "..."]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = board_of(["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_of(["XOX", "OXO", "OXX"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
