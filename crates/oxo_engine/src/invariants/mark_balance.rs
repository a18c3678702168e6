//! Mark balance invariant: O moves first, so O leads X by at most one.

use super::Invariant;
use crate::state::GameState;
use crate::types::Mark;

/// Invariant: `count(O) - count(X)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let o = state.board().count(Mark::O);
        let x = state.board().count(Mark::X);
        o == x || o == x + 1
    }

    fn description() -> &'static str {
        "O leads X by zero or one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellId, GameEngine};

    #[test]
    fn test_new_session_holds() {
        assert!(MarkBalanceInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_through_a_full_round() {
        let mut engine = GameEngine::new();
        for tap in [1, 2, 4, 3, 7] {
            engine.tap_cell(tap).unwrap();
            assert!(MarkBalanceInvariant::holds(engine.snapshot()));
        }
    }

    #[test]
    fn test_x_ahead_violates() {
        let mut state = GameState::new();
        state
            .board_mut()
            .set(CellId::CENTER, crate::Cell::Occupied(Mark::X));
        assert!(!MarkBalanceInvariant::holds(&state));
    }
}
