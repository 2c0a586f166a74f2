//! Command-line interface for the terminal front-end.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal - two players, one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe-tui")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (colors, log filter)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to (stdout belongs to the UI)
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: PathBuf,
}
