//! The published game snapshot.

use crate::rules::WinLine;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Status line shown under the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    /// It is this player's move.
    Turn(Mark),
    /// This player completed a line.
    Won(Mark),
    /// The board filled without a line.
    Draw,
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::Turn(mark) => write!(f, "Player {}'s Turn", mark),
            Hint::Won(mark) => write!(f, "Player {} Won", mark),
            Hint::Draw => write!(f, "Game Draw"),
        }
    }
}

/// Complete game state, board included.
///
/// A snapshot is a plain value: the engine builds a new one for every
/// accepted action and never hands out a mutable reference, so the board and
/// the turn/score fields are always observed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_turn: Option<Mark>,
    has_won: bool,
    win_line: Option<WinLine>,
    hint_text: String,
    score_o: u32,
    score_x: u32,
    draw_count: u32,
}

impl GameState {
    /// Start-of-session state: empty board, O to move, all counters zero.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Some(Mark::O),
            has_won: false,
            win_line: None,
            hint_text: Hint::Turn(Mark::O).to_string(),
            score_o: 0,
            score_x: 0,
            draw_count: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose mark goes down next, or `None` once the round is won.
    pub fn current_turn(&self) -> Option<Mark> {
        self.current_turn
    }

    /// Returns true once a line has been completed this round.
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    /// The line that won this round, if any.
    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    /// Human-readable status (turn prompt, win or draw announcement).
    pub fn hint_text(&self) -> &str {
        &self.hint_text
    }

    /// Rounds won by O this session.
    pub fn score_o(&self) -> u32 {
        self.score_o
    }

    /// Rounds won by X this session.
    pub fn score_x(&self) -> u32 {
        self.score_x
    }

    /// Rounds won by `mark` this session.
    pub fn score(&self, mark: Mark) -> u32 {
        match mark {
            Mark::O => self.score_o,
            Mark::X => self.score_x,
        }
    }

    /// Rounds drawn this session.
    pub fn draw_count(&self) -> u32 {
        self.draw_count
    }

    /// Rounds finished this session.
    pub fn rounds_played(&self) -> u32 {
        self.score_o + self.score_x + self.draw_count
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_hint(&mut self, hint: Hint) {
        self.hint_text = hint.to_string();
    }

    pub(crate) fn pass_turn(&mut self, to: Mark) {
        self.current_turn = Some(to);
        self.set_hint(Hint::Turn(to));
    }

    pub(crate) fn record_win(&mut self, mark: Mark, line: WinLine) {
        self.has_won = true;
        self.win_line = Some(line);
        self.current_turn = None;
        match mark {
            Mark::O => self.score_o += 1,
            Mark::X => self.score_x += 1,
        }
        self.set_hint(Hint::Won(mark));
    }

    /// Draws leave `current_turn` alone. The board is full, so every later
    /// tap is dropped as occupied anyway.
    pub(crate) fn record_draw(&mut self) {
        self.draw_count += 1;
        self.set_hint(Hint::Draw);
    }

    /// Clears the round, keeping session counters.
    pub(crate) fn new_round(&self) -> Self {
        Self {
            score_o: self.score_o,
            score_x: self.score_x,
            draw_count: self.draw_count,
            ..Self::new()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_text() {
        assert_eq!(Hint::Turn(Mark::O).to_string(), "Player O's Turn");
        assert_eq!(Hint::Turn(Mark::X).to_string(), "Player X's Turn");
        assert_eq!(Hint::Won(Mark::X).to_string(), "Player X Won");
        assert_eq!(Hint::Draw.to_string(), "Game Draw");
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.current_turn(), Some(Mark::O));
        assert!(!state.has_won());
        assert_eq!(state.win_line(), None);
        assert_eq!(state.hint_text(), "Player O's Turn");
        assert_eq!(state.rounds_played(), 0);
    }

    #[test]
    fn test_new_round_keeps_counters() {
        let mut state = GameState::new();
        state.record_win(Mark::X, WinLine::Column3);
        state.record_draw();
        let next = state.new_round();
        assert_eq!(next.score_x(), 1);
        assert_eq!(next.draw_count(), 1);
        assert_eq!(next.current_turn(), Some(Mark::O));
        assert!(!next.has_won());
        assert_eq!(next.win_line(), None);
    }
}
