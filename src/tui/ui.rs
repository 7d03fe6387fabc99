//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::view::{BoardView, CellView, SortOrder};
use crate::games::tictactoe::{Player, Position, Square};

const BOARD_WIDTH: u16 = 29;
const BOARD_HEIGHT: u16 = 11;

/// Draws the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT + 5),
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Timetravel - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 6), Constraint::Min(30)])
        .split(chunks[1]);

    draw_game(frame, body[0], app);
    draw_history(frame, body[1], app);

    let help = Paragraph::new(
        "Arrows: move  Enter: play/jump  1-9: play cell  Tab: switch pane  s: sort  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.board_view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(BOARD_HEIGHT + 2)])
        .split(area);

    let status_style = if view.status.is_over() {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let focused = app.focus() == Focus::Board;
    let block = pane_block("Board", focused);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let cursor = focused.then_some(app.cursor());
    draw_board(frame, center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT), &view, cursor);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView, cursor: Option<Position>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    for (row, cells) in view.cells.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], cells, cursor);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[CellView], cursor: Option<Position>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for (col, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[col * 2], cell, cursor == Some(cell.position));
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, under_cursor: bool) {
    let (symbol, mut style) = match cell.square {
        Square::Empty => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if cell.is_winning {
        style = style.bg(Color::Yellow);
    } else if cell.is_last_marked {
        style = style.bg(Color::Gray);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Blank rows above and below carry the background colour.
    let lines = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(format!("{:^width$}", symbol, width = area.width as usize), style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let toggle_style = match app.sort_order() {
        SortOrder::Ascending => Style::default().fg(Color::Red),
        SortOrder::Descending => Style::default().fg(Color::Green),
    };
    let toggle = Paragraph::new(format!("[s] {}", app.sort_label()))
        .style(toggle_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, chunks[0]);

    let items: Vec<ListItem> = app
        .move_list()
        .iter()
        .map(|label| {
            let style = if label.is_current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(label.to_string(), style)))
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let list = List::new(items)
        .block(pane_block("History", focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.list_cursor_row()));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
