//! Headless `replay` command.

use anyhow::{Context, Result};
use oxo_engine::{GameEngine, GameState};
use tracing::{info, instrument};

use crate::cli::OutputFormat;
use crate::tui::scoreboard;

/// Applies `taps` to a new session and renders the final snapshot.
#[instrument]
pub fn run(taps: &[i32], format: OutputFormat) -> Result<String> {
    let engine = GameEngine::replay(taps).context("Replay failed")?;
    info!(hint = %engine.snapshot().hint_text(), "Replay finished");
    render(engine.snapshot(), format)
}

/// Renders a snapshot in the requested format.
pub fn render(state: &GameState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(state)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(state).context("Failed to serialize snapshot")
        }
    }
}

fn render_text(state: &GameState) -> String {
    let mut out = format!("{}\n\n{}\n", state.board().display(), state.hint_text());
    if let Some(line) = state.win_line() {
        out.push_str(&format!("Winning line: {}\n", line));
    }
    out.push_str(&scoreboard(state));
    out.push('\n');
    out
}
