//! oxo - two-player tic-tac-toe in the terminal

use anyhow::Result;
use clap::Parser;
use oxo::{AppConfig, Cli, Command, OutputFormat, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Replay { taps, format } => run_replay(&config, &taps, format),
    }
}

/// Prints the final snapshot of a tap sequence.
fn run_replay(config: &AppConfig, taps: &[i32], format: OutputFormat) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging().filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(taps = taps.len(), ?format, "Replaying taps");
    let out = replay::run(taps, format)?;
    print!("{}", out);
    Ok(())
}
