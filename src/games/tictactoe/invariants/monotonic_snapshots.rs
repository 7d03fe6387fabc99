//! Monotonic snapshots invariant: each ply adds exactly one mark.

use super::super::{Board, GameHistory, Square};
use super::Invariant;

/// Invariant: entry 0 is empty and every later snapshot equals its
/// predecessor with the recorded move's mark added to a previously empty
/// square.
///
/// Together with [`AlternatingMarksInvariant`](super::AlternatingMarksInvariant)
/// this means entry `i` holds exactly `i` marks.
pub struct MonotonicSnapshotsInvariant;

impl Invariant<GameHistory> for MonotonicSnapshotsInvariant {
    fn holds(history: &GameHistory) -> bool {
        let entries = history.entries();
        let Some(first) = entries.first() else {
            return false;
        };
        if *first.board() != Board::new() {
            return false;
        }

        entries.windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            match next.last_move() {
                Some(mov) => {
                    prev.board().get(mov.position) == Square::Empty
                        && prev.board().with_mark(mov.position, mov.player) == *next.board()
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(MonotonicSnapshotsInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_played_history_holds() {
        let history = GameHistory::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
        ])
        .unwrap();
        assert!(MonotonicSnapshotsInvariant::holds(&history));
    }

    #[test]
    fn test_extra_square_violates() {
        let mut history = GameHistory::replay(&[Position::Center]).unwrap();
        history.entries[1].board = history.entries[1]
            .board
            .with_mark(Position::TopLeft, Player::O);
        assert!(!MonotonicSnapshotsInvariant::holds(&history));
    }
}
