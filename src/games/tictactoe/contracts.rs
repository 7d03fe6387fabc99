//! Contract-based validation for history transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} play {Q}.

use super::action::{HistoryError, Move};
use super::history::GameHistory;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), HistoryError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), HistoryError>;
}

/// Precondition: the selected snapshot has no winner yet.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects play on a won snapshot.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), HistoryError> {
        match rules::evaluate(history.current_board()) {
            Some(_) => Err(HistoryError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects play on an occupied square.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &GameHistory) -> Result<(), HistoryError> {
        if history.current_board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(HistoryError::SquareOccupied(mov.position))
        }
    }
}

/// Postcondition: playing from ply `k` leaves exactly `k + 2` entries, the
/// first `k + 1` unchanged, with the new entry selected.
pub struct BranchTruncated;

impl BranchTruncated {
    /// Compares the history before and after a play.
    #[instrument(skip_all)]
    pub fn holds(before: &GameHistory, after: &GameHistory) -> bool {
        let kept = before.selected() + 1;
        let valid = after.len() == kept + 1
            && after.selected() == kept
            && after.entries()[..kept] == before.entries()[..kept];
        if !valid {
            warn!(
                before_len = before.len(),
                before_selected = before.selected(),
                after_len = after.len(),
                after_selected = after.selected(),
                "Branch truncation violated"
            );
        }
        valid
    }
}

/// Contract for play actions.
///
/// Preconditions:
/// - Selected snapshot has no winner
/// - Square must be empty
///
/// Postconditions:
/// - Future entries were discarded and one entry appended
/// - All [`HistoryInvariants`] hold
pub struct PlayContract;

impl Contract<GameHistory, Move> for PlayContract {
    fn pre(history: &GameHistory, action: &Move) -> Result<(), HistoryError> {
        GameUndecided::check(history)?;
        SquareIsEmpty::check(action, history)?;
        Ok(())
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), HistoryError> {
        if !BranchTruncated::holds(before, after) {
            return Err(HistoryError::InvariantViolation(
                "Postcondition failed: play did not replace the future branch".to_string(),
            ));
        }
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HistoryError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
