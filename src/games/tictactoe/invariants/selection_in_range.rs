//! Selection invariant: the selected ply names an existing entry.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `0 <= selected < len`.
pub struct SelectionInRangeInvariant;

impl Invariant<GameHistory> for SelectionInRangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.selected() < history.len()
    }

    fn description() -> &'static str {
        "Selected position lies within the history"
    }
}
