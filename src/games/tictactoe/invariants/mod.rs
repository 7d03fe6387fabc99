//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and are checked as play postconditions
//! in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod alternating_marks;
pub mod monotonic_snapshots;
pub mod selection_in_range;

pub use alternating_marks::AlternatingMarksInvariant;
pub use monotonic_snapshots::MonotonicSnapshotsInvariant;
pub use selection_in_range::SelectionInRangeInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    MonotonicSnapshotsInvariant,
    AlternatingMarksInvariant,
    SelectionInRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameHistory, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut history = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        history.jump_to(1).unwrap();
        history.play(Position::BottomLeft).unwrap();

        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut history = GameHistory::replay(&[Position::TopLeft]).unwrap();
        // Overwrite ply 1 with an O mark and point the selection past the end.
        history.entries[1].board = history.entries[1].board.with_mark(Position::TopLeft, Player::O);
        history.selected = 5;

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicSnapshotsInvariant, AlternatingMarksInvariant);
        assert!(TwoInvariants::check_all(&GameHistory::new()).is_ok());
    }
}
