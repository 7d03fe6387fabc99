//! Strictly Timetravel - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_timetravel::{Settings, SortOrder, init_tracing, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;
    if cli.descending {
        settings = settings.with_sort_order(SortOrder::Descending);
    }
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }

    init_tracing(&settings)?;
    info!(config = %cli.config.display(), "Settings resolved");

    run_tui(&settings)
}
