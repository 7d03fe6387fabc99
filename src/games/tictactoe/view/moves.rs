//! Move list labels and sort order.

use super::super::{GameHistory, Move};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Chronological order of the move list. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest entry first.
    #[default]
    Ascending,
    /// Newest entry first.
    Descending,
}

impl SortOrder {
    /// The other order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label for the control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort Descending",
            SortOrder::Descending => "Sort Ascending",
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveLabel {
    /// Ply of the entry; never renumbered by sorting.
    pub index: usize,
    /// The move that produced the entry.
    pub last_move: Option<Move>,
    /// Whether this is the selected entry.
    pub is_current: bool,
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = if self.is_current { "You are at" } else { "Go to" };
        match self.last_move {
            Some(mov) if self.index > 0 => {
                write!(f, "{} move #{} {}", prefix, self.index, mov.position)
            }
            _ => write!(f, "{} game start", prefix),
        }
    }
}

/// Labels for every history entry, in `order`.
#[instrument(skip(history), fields(len = history.len()))]
pub fn move_list(history: &GameHistory, order: SortOrder) -> Vec<MoveLabel> {
    let labels = history
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| MoveLabel {
            index,
            last_move: entry.last_move(),
            is_current: index == history.selected(),
        });

    match order {
        SortOrder::Ascending => labels.collect(),
        SortOrder::Descending => labels.rev().collect(),
    }
}
