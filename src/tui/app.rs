//! Application state and key handling.

use crossterm::event::KeyCode;
use oxo_engine::{Action, CellId, GameState, GameStore, Transition};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, instrument, warn};

use super::input::{digit_cell, move_cursor};

/// Main application state.
///
/// The app never reads the engine directly while rendering: it keeps the
/// last snapshot the store published and redraws from that.
pub struct App {
    store: GameStore,
    updates: UnboundedReceiver<GameState>,
    state: GameState,
    cursor: CellId,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh session.
    pub fn new(show_cell_numbers: bool) -> Self {
        let mut store = GameStore::new();
        let updates = store.subscribe();
        let state = store.snapshot().clone();
        Self {
            store,
            updates,
            state,
            cursor: CellId::CENTER,
            show_cell_numbers,
            should_quit: false,
        }
    }

    /// The most recently published snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> CellId {
        self.cursor
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.dispatch(Action::Reset),
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Action::tap(self.cursor)),
            code => {
                if let Some(cell) = digit_cell(code) {
                    self.cursor = cell;
                    self.dispatch(Action::tap(cell));
                } else {
                    self.cursor = move_cursor(self.cursor, code);
                }
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        match self.store.dispatch(action) {
            Ok(Transition::Ignored(reason)) => debug!(?reason, "Action ignored"),
            Ok(transition) => debug!(%transition, "Action accepted"),
            Err(e) if e.is_invalid_input() => warn!(error = %e, "Tap rejected"),
            Err(e) => error!(error = %e, "Engine error"),
        }
        self.sync();
    }

    /// Pulls any published snapshots into the view state.
    pub fn sync(&mut self) {
        while let Ok(state) = self.updates.try_recv() {
            self.state = state;
        }
    }
}
