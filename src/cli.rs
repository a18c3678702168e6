//! Command-line interface for oxo.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// oxo - two-player tic-tac-toe with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, env = "OXO_CONFIG", default_value = "oxo.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a sequence of taps to a new session and print the result
    Replay {
        /// Cells to tap, 1-9, space or comma separated
        #[arg(required = true, value_delimiter = ',', allow_negative_numbers = true)]
        taps: Vec<i32>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints the final snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board, hint and scoreboard as plain text.
    Text,
    /// The full snapshot as pretty-printed JSON.
    Json,
}
