//! Terminal UI for oxo.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{digit_cell, move_cursor};
pub use ui::{draw, scoreboard};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Runs the interactive game until the user quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    // Log to a file so output does not tear the screen.
    let log_path = config.logging().file();
    let log_file = std::fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging().filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting oxo TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*config.display().show_cell_numbers());
    let res = run_app(&mut terminal, &mut app);

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        score_o = app.state().score_o(),
        score_x = app.state().score_x(),
        draws = app.state().draw_count(),
        "Session finished"
    );

    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.sync();
        terminal.draw(|f| draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too.
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit() {
            info!("Quitting");
            return Ok(());
        }
    }
}

/// Raw mode and the alternate screen, undone on drop.
///
/// Every exit from [`run_tui`] after entering, early `?` returns included,
/// gives the user back a normal terminal.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = leave_screen(&mut io::stdout()) {
            error!(error = %e, "Failed to leave alternate screen");
        }
    }
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}
