//! Observable wrapper that publishes a snapshot per accepted action.

use crate::action::{Action, Transition};
use crate::engine::GameEngine;
use crate::error::EngineError;
use crate::state::GameState;
use tokio::sync::mpsc;
use tracing::{debug, instrument, trace};

/// A [`GameEngine`] plus the front ends watching it.
///
/// Subscribers receive one [`GameState`] for every accepted action and
/// nothing for ignored taps or rejected input. Sends never block, so the
/// store works without an async runtime.
#[derive(Debug, Default)]
pub struct GameStore {
    engine: GameEngine,
    subscribers: Vec<mpsc::UnboundedSender<GameState>>,
}

impl GameStore {
    /// Creates a store around a fresh session.
    #[instrument]
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            subscribers: Vec::new(),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> &GameState {
        self.engine.snapshot()
    }

    /// Registers a new observer.
    ///
    /// The receiver only sees states published after this call; read
    /// [`GameStore::snapshot`] for the current one.
    #[instrument(skip(self))]
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameState> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        debug!(subscribers = self.subscribers.len(), "Subscriber added");
        rx
    }

    /// Applies an action and publishes the new state if it was accepted.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Result<Transition, EngineError> {
        let transition = self.engine.dispatch(action)?;
        if transition.is_accepted() {
            self.publish();
        }
        Ok(transition)
    }

    fn publish(&mut self) {
        let state = self.engine.snapshot();
        self.subscribers
            .retain(|tx| tx.send(state.clone()).is_ok());
        trace!(subscribers = self.subscribers.len(), "Snapshot published");
    }
}
