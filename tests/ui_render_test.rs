//! Rendering tests against ratatui's test backend.

use ratatui::{Terminal, backend::TestBackend};
use strictly_timetravel::{App, Input, SortOrder, draw};

fn render(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

fn click(app: &mut App, row: usize, col: usize) {
    let _ = app.apply(Input::ClickCell { row, col });
}

#[test]
fn test_initial_screen() {
    let lines = render(&App::new(SortOrder::Ascending));

    assert!(contains(&lines, "Next player: X"));
    assert!(contains(&lines, "You are at game start"));
    assert!(contains(&lines, "Sort Descending"));
}

#[test]
fn test_finished_game_screen() {
    let mut app = App::default();
    click(&mut app, 0, 0);
    click(&mut app, 1, 1);
    click(&mut app, 0, 1);
    click(&mut app, 1, 0);
    click(&mut app, 0, 2);

    let lines = render(&app);
    assert!(contains(&lines, "Winner: X"));
    assert!(contains(&lines, "You are at move #5 (0, 2)"));
    assert!(contains(&lines, "Go to move #1 (0, 0)"));
}

#[test]
fn test_descending_screen_lists_newest_first() {
    let mut app = App::new(SortOrder::Descending);
    click(&mut app, 0, 0);
    click(&mut app, 2, 2);

    let lines = render(&app);
    assert!(contains(&lines, "Sort Ascending"));

    let newest = lines.iter().position(|l| l.contains("move #2 (2, 2)")).unwrap();
    let start = lines.iter().position(|l| l.contains("game start")).unwrap();
    assert!(newest < start);
}

#[test]
fn test_jump_updates_status_and_current_label() {
    let mut app = App::default();
    click(&mut app, 0, 0);
    click(&mut app, 1, 1);
    let _ = app.apply(Input::ClickHistory { index: 1 });

    let lines = render(&app);
    assert!(contains(&lines, "Next player: O"));
    assert!(contains(&lines, "You are at move #1 (0, 0)"));
    assert!(contains(&lines, "Go to move #2 (1, 1)"));
}
