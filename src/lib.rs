//! oxo - two-player tic-tac-toe in the terminal
//!
//! The game rules live in [`oxo_engine`]; this crate adds the presentation
//! layer on top of it.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for logging and display
//! - **TUI**: ratatui front end that renders published snapshots
//! - **Replay**: headless rendering of a tap sequence
//!
//! # Example
//!
//! ```
//! use oxo::{OutputFormat, replay};
//!
//! let out = replay::run(&[5, 1, 9], OutputFormat::Json)?;
//! assert!(out.contains("\"hint_text\": \"Player X's Turn\""));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod replay;
mod tui;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{AppConfig, ConfigError, DisplayConfig, LoggingConfig};
pub use tui::{App, digit_cell, draw, move_cursor, run_tui, scoreboard};
