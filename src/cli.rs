//! Command-line interface for strictly_timetravel.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with a browsable move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Terminal tic-tac-toe with time-travel history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file
    #[arg(short, long, default_value = "strictly_timetravel.toml")]
    pub config: PathBuf,

    /// Start with the move list sorted newest first
    #[arg(long)]
    pub descending: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
