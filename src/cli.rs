//! Command-line interface for tui-tictactoe.

use std::path::PathBuf;

use clap::Parser;

use crate::types::TICK_MS;

/// Terminal Tic-Tac-Toe for two players sharing one mouse
#[derive(Parser, Debug, Clone)]
#[command(name = "tui-tictactoe")]
#[command(about = "Two-player Tic-Tac-Toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the starting-player coin flips (random when omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Frame interval in milliseconds
    #[arg(long, default_value_t = TICK_MS, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub tick_ms: u32,

    /// File that receives the log output
    #[arg(long, default_value = "tui-tictactoe.log")]
    pub log_file: PathBuf,

    /// Disable logging entirely
    #[arg(long)]
    pub no_log: bool,
}
