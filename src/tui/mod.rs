//! Terminal UI for Strictly Timetravel

mod app;
mod input;
mod ui;

pub use app::{App, Focus, Input};
pub use ui::draw;

use crate::config::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Routes tracing output to the configured log file.
///
/// The TUI owns stdout, so logs never go to the terminal. `RUST_LOG`
/// overrides the configured filter.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the TUI until the user quits.
#[instrument(skip_all, fields(sort_order = ?settings.sort_order()))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting Strictly Timetravel TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*settings.sort_order());
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, read one key, repeat.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code).is_break()
        {
            info!(plies = app.history().len() - 1, "Leaving game");
            return Ok(());
        }
    }
}
