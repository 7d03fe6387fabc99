//! Alternating marks invariant: X, O, X, O, ... by ply.

use super::super::{GameHistory, Player};
use super::Invariant;

/// Invariant: the move recorded at ply `i` belongs to the player for ply `i - 1`.
///
/// Entry 0 must carry no move; every later entry must carry one.
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .iter()
            .enumerate()
            .all(|(ply, entry)| match (ply, entry.last_move()) {
                (0, None) => true,
                (0, Some(_)) | (_, None) => false,
                (ply, Some(mov)) => mov.player == Player::for_ply(ply - 1),
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X (X, O, X, O, ...)"
    }
}
