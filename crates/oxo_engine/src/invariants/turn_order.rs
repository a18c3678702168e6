//! Turn order invariant: while a round is open, the mark count decides who
//! moves next.

use super::Invariant;
use crate::rules::is_full;
use crate::state::GameState;
use crate::types::Mark;

/// Invariant: in an open round, O moves when counts are equal, X otherwise.
///
/// Won rounds and full boards are exempt: a win clears the turn and a draw
/// leaves it on the player who filled the last cell.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        if state.has_won() || is_full(state.board()) {
            return true;
        }

        let expected = if state.board().count(Mark::O) == state.board().count(Mark::X) {
            Mark::O
        } else {
            Mark::X
        };
        state.current_turn() == Some(expected)
    }

    fn description() -> &'static str {
        "Players alternate turns (O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameEngine;

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameEngine::new();
        for tap in [5, 1, 3, 7] {
            engine.tap_cell(tap).unwrap();
            assert!(TurnOrderInvariant::holds(engine.snapshot()));
        }
        assert_eq!(engine.snapshot().current_turn(), Some(Mark::O));
    }

    #[test]
    fn test_draw_is_exempt() {
        let engine = GameEngine::replay(&[1, 2, 3, 5, 4, 6, 8, 7, 9]).unwrap();
        assert_eq!(engine.snapshot().draw_count(), 1);
        assert!(TurnOrderInvariant::holds(engine.snapshot()));
    }

    #[test]
    fn test_wrong_turn_violates() {
        let mut state = GameState::new();
        state.pass_turn(Mark::X);
        assert!(!TurnOrderInvariant::holds(&state));
    }
}
