//! Application state and input handling.

use super::input::{digit_position, move_cursor};
use crate::games::tictactoe::view::{self, BoardView, MoveLabel, SortOrder};
use crate::games::tictactoe::{GameHistory, HistoryError, Position};
use crossterm::event::KeyCode;
use std::ops::ControlFlow;
use tracing::{debug, error, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// User intents, independent of how they were entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Mark the cell at (row, col).
    ClickCell {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Flip the move list order.
    ToggleSort,
    /// Select the history entry at `index`.
    ClickHistory {
        /// Ply of the entry.
        index: usize,
    },
    /// Leave the application.
    Quit,
}

/// Main application state.
///
/// Owns the history and sort order; views are recomputed from them on
/// demand.
#[derive(Debug, Clone)]
pub struct App {
    history: GameHistory,
    sort_order: SortOrder,
    focus: Focus,
    cursor: Position,
    /// History index under the move-list cursor.
    list_cursor: usize,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            history: GameHistory::new(),
            sort_order,
            focus: Focus::default(),
            cursor: Position::Center,
            list_cursor: 0,
        }
    }

    /// The game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Current move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Row of the move-list cursor in display order.
    pub fn list_cursor_row(&self) -> usize {
        match self.sort_order {
            SortOrder::Ascending => self.list_cursor,
            SortOrder::Descending => self.history.len() - 1 - self.list_cursor,
        }
    }

    /// Board cells and status for the selected ply.
    pub fn board_view(&self) -> BoardView {
        view::board_view(&self.history)
    }

    /// Move labels in the current order.
    pub fn move_list(&self) -> Vec<MoveLabel> {
        view::move_list(&self.history, self.sort_order)
    }

    /// Label of the sort toggle.
    pub fn sort_label(&self) -> &'static str {
        self.sort_order.toggle_label()
    }

    /// Applies a user intent.
    ///
    /// Invalid plays are ignored; the state is left unchanged.
    #[instrument(skip(self))]
    pub fn apply(&mut self, input: Input) -> ControlFlow<()> {
        match input {
            Input::ClickCell { row, col } => match Position::from_coords(row, col) {
                Some(pos) => self.play(pos),
                None => debug!(row, col, "Ignoring click outside the board"),
            },
            Input::ToggleSort => {
                self.sort_order = self.sort_order.toggle();
                info!(sort_order = ?self.sort_order, "Sort order toggled");
            }
            Input::ClickHistory { index } => self.jump_to(index),
            Input::Quit => {
                info!("User quit");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Translates a key press into navigation or an [`Input`].
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> ControlFlow<()> {
        if let Some(pos) = digit_position(key) {
            return self.apply(Input::ClickCell {
                row: pos.row(),
                col: pos.col(),
            });
        }

        match (self.focus, key) {
            (_, KeyCode::Char('q') | KeyCode::Esc) => return self.apply(Input::Quit),
            (_, KeyCode::Char('s')) => return self.apply(Input::ToggleSort),
            (_, KeyCode::Tab) => self.focus = self.focus.toggle(),
            (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => {
                return self.apply(Input::ClickCell {
                    row: self.cursor.row(),
                    col: self.cursor.col(),
                });
            }
            (Focus::Board, code) => self.cursor = move_cursor(self.cursor, code),
            (Focus::History, KeyCode::Enter | KeyCode::Char(' ')) => {
                return self.apply(Input::ClickHistory {
                    index: self.list_cursor,
                });
            }
            (Focus::History, KeyCode::Up) => self.step_list(-1),
            (Focus::History, KeyCode::Down) => self.step_list(1),
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn play(&mut self, pos: Position) {
        match self.history.play(pos) {
            Ok(()) => self.list_cursor = self.history.selected(),
            Err(e @ (HistoryError::GameOver | HistoryError::SquareOccupied(_))) => {
                debug!(error = %e, "Play rejected");
            }
            Err(e) => error!(error = %e, "History corrupted by play"),
        }
    }

    fn jump_to(&mut self, index: usize) {
        match self.history.jump_to(index) {
            Ok(()) => self.list_cursor = index,
            Err(e) => debug!(error = %e, "Jump rejected"),
        }
    }

    /// Moves the list cursor by `delta` rows in display order.
    fn step_list(&mut self, delta: isize) {
        let delta = match self.sort_order {
            SortOrder::Ascending => delta,
            SortOrder::Descending => -delta,
        };
        let last = self.history.len() - 1;
        self.list_cursor = self.list_cursor.saturating_add_signed(delta).min(last);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
