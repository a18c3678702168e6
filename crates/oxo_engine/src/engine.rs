//! The game engine: one owned state value and one dispatch entry point.

use crate::action::{Action, Transition};
use crate::cell::CellId;
use crate::contracts::{Contract, PlacementContract, ResetContract};
use crate::error::EngineError;
use crate::rules::{check_win, is_draw};
use crate::state::GameState;
use crate::types::Cell;
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine for one session.
///
/// Owns the current [`GameState`]. Every action is applied to a copy of the
/// state which replaces the old one only when the transition is complete.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Starts a session: empty board, O to move, counters at zero.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Builds an engine and taps each cell in order.
    ///
    /// Ignored taps are skipped over, exactly as they would be in play. The
    /// first out-of-range cell aborts the replay.
    #[instrument]
    pub fn replay(taps: &[i32]) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        for tap in taps {
            engine.tap_cell(*tap)?;
        }
        Ok(engine)
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    /// Applies one action.
    ///
    /// Taps on occupied cells and taps after a win come back as
    /// [`Transition::Ignored`] with the state untouched. Only a cell number
    /// outside 1-9 is an error.
    #[instrument(skip(self), fields(turn = ?self.state.current_turn()))]
    pub fn dispatch(&mut self, action: Action) -> Result<Transition, EngineError> {
        let transition = match action {
            Action::TapCell(number) => self.place(CellId::new(number)?)?,
            Action::Reset => self.start_round()?,
        };
        debug!(%transition, "Action applied");
        Ok(transition)
    }

    /// Shorthand for dispatching [`Action::TapCell`].
    pub fn tap_cell(&mut self, number: i32) -> Result<Transition, EngineError> {
        self.dispatch(Action::TapCell(number))
    }

    /// Shorthand for dispatching [`Action::Reset`].
    pub fn reset(&mut self) -> Result<Transition, EngineError> {
        self.dispatch(Action::Reset)
    }

    fn place(&mut self, cell: CellId) -> Result<Transition, EngineError> {
        let mark = match PlacementContract::pre(&self.state, &cell) {
            Ok(mark) => mark,
            Err(reason) => {
                debug!(?reason, %cell, "Tap ignored");
                return Ok(Transition::Ignored(reason));
            }
        };

        let mut next = self.state.clone();
        next.board_mut().set(cell, Cell::Occupied(mark));

        let transition = if let Some(line) = check_win(next.board(), mark) {
            next.record_win(mark, line);
            info!(%mark, %line, score = next.score(mark), "Round won");
            Transition::Won { cell, mark, line }
        } else if is_draw(next.board(), mark) {
            next.record_draw();
            info!(draws = next.draw_count(), "Round drawn");
            Transition::Drawn { cell, mark }
        } else {
            next.pass_turn(mark.opponent());
            Transition::Placed { cell, mark }
        };

        #[cfg(debug_assertions)]
        PlacementContract::post(&self.state, &next)?;

        self.state = next;
        Ok(transition)
    }

    fn start_round(&mut self) -> Result<Transition, EngineError> {
        if let Err(never) = ResetContract::pre(&self.state, &()) {
            match never {}
        }

        let next = self.state.new_round();

        #[cfg(debug_assertions)]
        ResetContract::post(&self.state, &next)?;

        self.state = next;
        info!(rounds = self.state.rounds_played(), "New round");
        Ok(Transition::Reset)
    }
}
