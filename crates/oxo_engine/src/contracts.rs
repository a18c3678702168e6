//! Contract-based validation for engine transitions.
//!
//! Preconditions decide whether a tap is played at all. Postconditions
//! compare the snapshot before and after a transition and are enforced in
//! debug builds.

use crate::action::IgnoreReason;
use crate::cell::CellId;
use crate::error::{EngineError, EngineErrorKind};
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::state::GameState;
use crate::types::{Cell, Mark};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// What a passing precondition hands to the transition.
    type Granted;

    /// Why an action is turned away before it runs.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Granted, Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: nobody has won the round yet.
pub struct RoundOpen;

impl RoundOpen {
    /// Returns the mark to play, or rejects taps once a win locked the turn.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<Mark, IgnoreReason> {
        state.current_turn().ok_or(IgnoreReason::RoundOver)
    }
}

/// Precondition: the tapped cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects taps on occupied cells.
    #[instrument(skip(state))]
    pub fn check(cell: CellId, state: &GameState) -> Result<(), IgnoreReason> {
        if state.board().is_empty(cell) {
            Ok(())
        } else {
            Err(IgnoreReason::Occupied(cell))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: a placement fills exactly one empty cell and touches
/// nothing else.
pub struct BoardMonotonic;

impl BoardMonotonic {
    /// Compares two boards cell by cell.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mut filled = 0;
        for (old, new) in before.board().cells().iter().zip(after.board().cells()) {
            match (old, new) {
                (a, b) if a == b => {}
                (Cell::Empty, Cell::Occupied(_)) => filled += 1,
                _ => {
                    warn!(?old, ?new, "Cell changed after being played");
                    return false;
                }
            }
        }

        if filled != 1 {
            warn!(filled, "Placement must fill exactly one cell");
        }
        filled == 1
    }
}

/// Postcondition: session counters never go down and rise by at most one.
pub struct CountersMonotonic;

impl CountersMonotonic {
    /// Compares the score and draw counters of two snapshots.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let never_down = after.score_o() >= before.score_o()
            && after.score_x() >= before.score_x()
            && after.draw_count() >= before.draw_count();
        let step = after.rounds_played().saturating_sub(before.rounds_played());

        let valid = never_down && step <= 1;
        if !valid {
            warn!(
                before = before.rounds_played(),
                after = after.rounds_played(),
                "Session counters moved unexpectedly"
            );
        }
        valid
    }
}

/// Postcondition: a reset leaves an empty board with the counters intact.
pub struct FreshRound;

impl FreshRound {
    /// Checks the snapshot produced by a reset.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        after.board().mark_count() == 0
            && after.score_o() == before.score_o()
            && after.score_x() == before.score_x()
            && after.draw_count() == before.draw_count()
    }
}

fn invariants_hold(after: &GameState) -> Result<(), EngineError> {
    RoundInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description)
            .collect::<Vec<_>>()
            .join("; ");
        EngineError::new(EngineErrorKind::InvariantViolation(format!(
            "Postcondition failed: {}",
            descriptions
        )))
    })
}

// ─────────────────────────────────────────────────────────────
//  Transition Contracts
// ─────────────────────────────────────────────────────────────

/// Contract for placing the current mark.
///
/// Preconditions:
/// - Round not yet won
/// - Cell empty
///
/// Postconditions:
/// - Exactly one cell filled
/// - Counters monotonic
/// - Snapshot invariants hold
pub struct PlacementContract;

impl Contract<GameState, CellId> for PlacementContract {
    type Granted = Mark;
    type Rejection = IgnoreReason;

    fn pre(state: &GameState, cell: &CellId) -> Result<Mark, IgnoreReason> {
        let mark = RoundOpen::check(state)?;
        CellIsEmpty::check(*cell, state)?;
        Ok(mark)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError> {
        if !BoardMonotonic::holds(before, after) {
            return Err(EngineError::new(EngineErrorKind::InvariantViolation(
                "Postcondition failed: board is not monotonic".to_string(),
            )));
        }
        if !CountersMonotonic::holds(before, after) {
            return Err(EngineError::new(EngineErrorKind::InvariantViolation(
                "Postcondition failed: counters are not monotonic".to_string(),
            )));
        }
        invariants_hold(after)
    }
}

/// Contract for starting a new round.
pub struct ResetContract;

impl Contract<GameState, ()> for ResetContract {
    type Granted = ();
    type Rejection = std::convert::Infallible;

    fn pre(_state: &GameState, _action: &()) -> Result<(), Self::Rejection> {
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError> {
        if !FreshRound::holds(before, after) {
            return Err(EngineError::new(EngineErrorKind::InvariantViolation(
                "Postcondition failed: reset must clear the board and keep counters".to_string(),
            )));
        }
        invariants_hold(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameEngine;

    #[test]
    fn test_precondition_grants_the_mark_to_play() {
        let state = GameState::new();
        assert_eq!(PlacementContract::pre(&state, &CellId::CENTER), Ok(Mark::O));

        let engine = GameEngine::replay(&[5]).unwrap();
        assert_eq!(
            PlacementContract::pre(engine.snapshot(), &CellId::TOP_LEFT),
            Ok(Mark::X)
        );
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let engine = GameEngine::replay(&[5]).unwrap();
        assert_eq!(
            PlacementContract::pre(engine.snapshot(), &CellId::CENTER),
            Err(IgnoreReason::Occupied(CellId::CENTER))
        );
    }

    #[test]
    fn test_precondition_round_over() {
        let engine = GameEngine::replay(&[1, 4, 2, 5, 3]).unwrap();
        assert_eq!(
            PlacementContract::pre(engine.snapshot(), &CellId::BOTTOM_RIGHT),
            Err(IgnoreReason::RoundOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut engine = GameEngine::new();
        engine.tap_cell(5).unwrap();
        assert!(PlacementContract::post(&before, engine.snapshot()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_two_cells_filled() {
        let before = GameState::new();
        let mut after = GameState::new();
        after
            .board_mut()
            .set(CellId::TOP_LEFT, Cell::Occupied(Mark::O));
        after
            .board_mut()
            .set(CellId::CENTER, Cell::Occupied(Mark::X));

        let err = PlacementContract::post(&before, &after).unwrap_err();
        assert!(matches!(err.kind, EngineErrorKind::InvariantViolation(_)));
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let engine = GameEngine::replay(&[5]).unwrap();
        let before = engine.snapshot().clone();
        let mut after = before.clone();
        after.board_mut().set(CellId::CENTER, Cell::Occupied(Mark::X));
        assert!(!BoardMonotonic::holds(&before, &after));
    }

    #[test]
    fn test_counters_cannot_drop() {
        let engine = GameEngine::replay(&[1, 4, 2, 5, 3]).unwrap();
        assert!(!CountersMonotonic::holds(engine.snapshot(), &GameState::new()));
    }

    #[test]
    fn test_reset_postcondition() {
        let engine = GameEngine::replay(&[1, 4, 2, 5, 3]).unwrap();
        let before = engine.snapshot().clone();
        let after = before.new_round();
        assert!(ResetContract::post(&before, &after).is_ok());
        assert!(ResetContract::post(&before, &GameState::new()).is_err());
    }
}
