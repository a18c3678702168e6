//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::types::{Board, Mark};
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// A full board is a draw only if `last` did not complete a line with the
/// move that filled it.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, last: Mark) -> bool {
    check_win(board, last).is_none() && is_full(board)
}
