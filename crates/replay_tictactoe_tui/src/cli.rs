//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Replay Tic-Tac-Toe - play, then travel back through the move history
#[derive(Parser, Debug)]
#[command(name = "replay_tictactoe")]
#[command(about = "Terminal tic-tac-toe with a replayable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, default_value = "replay_tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with the latest move at the top of the history panel
    #[arg(long)]
    pub descending: bool,
}
