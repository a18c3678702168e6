//! Win consistency invariant: the win flag, the recorded line and the turn
//! lock agree with each other and with the board.

use super::Invariant;
use crate::state::GameState;
use crate::types::Cell;

/// Invariant: `has_won` ⇔ `win_line.is_some()` ⇔ `current_turn.is_none()`,
/// and a recorded line is filled by a single mark.
pub struct WinConsistentInvariant;

impl Invariant<GameState> for WinConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        if state.has_won() != state.win_line().is_some() {
            return false;
        }
        if state.has_won() != state.current_turn().is_none() {
            return false;
        }

        match state.win_line() {
            None => true,
            Some(line) => {
                let [a, b, c] = line.cells().map(|cell| state.board().get(cell));
                a != Cell::Empty && a == b && b == c
            }
        }
    }

    fn description() -> &'static str {
        "Win flag, win line and turn lock agree with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Mark, WinLine};

    #[test]
    fn test_open_round_holds() {
        let engine = GameEngine::replay(&[1, 2]).unwrap();
        assert!(WinConsistentInvariant::holds(engine.snapshot()));
    }

    #[test]
    fn test_won_round_holds() {
        let engine = GameEngine::replay(&[1, 4, 2, 5, 3]).unwrap();
        assert!(engine.snapshot().has_won());
        assert!(WinConsistentInvariant::holds(engine.snapshot()));
    }

    #[test]
    fn test_line_not_on_board_violates() {
        let mut state = GameState::new();
        state.record_win(Mark::O, WinLine::Row3);
        assert!(!WinConsistentInvariant::holds(&state));
    }
}
