//! Win detection logic for tic-tac-toe.

use crate::cell::CellId;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that end a round when a single mark fills it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum WinLine {
    /// Cells 1, 2, 3.
    Row1,
    /// Cells 4, 5, 6.
    Row2,
    /// Cells 7, 8, 9.
    Row3,
    /// Cells 1, 4, 7.
    Column1,
    /// Cells 2, 5, 8.
    Column2,
    /// Cells 3, 6, 9.
    Column3,
    /// Cells 1, 5, 9.
    Diagonal,
    /// Cells 3, 5, 7.
    AntiDiagonal,
}

/// Every win line with its cells, in the order they are checked.
///
/// Order only matters when one move completes several lines at once: the
/// first match is the one recorded.
pub const WIN_LINES: [(WinLine, [CellId; 3]); 8] = [
    (WinLine::Row1, WinLine::Row1.cells()),
    (WinLine::Row2, WinLine::Row2.cells()),
    (WinLine::Row3, WinLine::Row3.cells()),
    (WinLine::Column1, WinLine::Column1.cells()),
    (WinLine::Column2, WinLine::Column2.cells()),
    (WinLine::Column3, WinLine::Column3.cells()),
    (WinLine::Diagonal, WinLine::Diagonal.cells()),
    (WinLine::AntiDiagonal, WinLine::AntiDiagonal.cells()),
];

impl WinLine {
    /// The three cells of this line.
    pub const fn cells(self) -> [CellId; 3] {
        use CellId as C;
        match self {
            WinLine::Row1 => [C::TOP_LEFT, C::TOP_CENTER, C::TOP_RIGHT],
            WinLine::Row2 => [C::MIDDLE_LEFT, C::CENTER, C::MIDDLE_RIGHT],
            WinLine::Row3 => [C::BOTTOM_LEFT, C::BOTTOM_CENTER, C::BOTTOM_RIGHT],
            WinLine::Column1 => [C::TOP_LEFT, C::MIDDLE_LEFT, C::BOTTOM_LEFT],
            WinLine::Column2 => [C::TOP_CENTER, C::CENTER, C::BOTTOM_CENTER],
            WinLine::Column3 => [C::TOP_RIGHT, C::MIDDLE_RIGHT, C::BOTTOM_RIGHT],
            WinLine::Diagonal => [C::TOP_LEFT, C::CENTER, C::BOTTOM_RIGHT],
            WinLine::AntiDiagonal => [C::TOP_RIGHT, C::CENTER, C::BOTTOM_LEFT],
        }
    }

    /// Returns true if `cell` lies on this line.
    pub fn contains(self, cell: CellId) -> bool {
        self.cells().contains(&cell)
    }

    /// Label for this line (for display).
    pub fn label(self) -> &'static str {
        match self {
            WinLine::Row1 => "top row",
            WinLine::Row2 => "middle row",
            WinLine::Row3 => "bottom row",
            WinLine::Column1 => "left column",
            WinLine::Column2 => "center column",
            WinLine::Column3 => "right column",
            WinLine::Diagonal => "diagonal",
            WinLine::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the first line, in priority order, filled entirely by `mark`.
#[instrument(skip(board))]
pub fn check_win(board: &Board, mark: Mark) -> Option<WinLine> {
    let filled = Cell::Occupied(mark);
    WIN_LINES
        .iter()
        .find(|(_, cells)| cells.iter().all(|cell| board.get(*cell) == filled))
        .map(|(line, _)| *line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn board_with(mark: Mark, cells: &[CellId]) -> Board {
        let mut board = Board::new();
        for cell in cells {
            board.set(*cell, Cell::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_win(&board, Mark::O), None);
        assert_eq!(check_win(&board, Mark::X), None);
    }

    #[test]
    fn test_table_covers_every_line_once() {
        let tags: Vec<WinLine> = WIN_LINES.iter().map(|(line, _)| *line).collect();
        assert_eq!(tags, WinLine::iter().collect::<Vec<_>>());

        let triples: HashSet<[CellId; 3]> = WIN_LINES.iter().map(|(_, cells)| *cells).collect();
        assert_eq!(triples.len(), 8);
    }

    #[test]
    fn test_line_cells_by_number() {
        let numbers = |line: WinLine| line.cells().map(|cell| cell.number());
        assert_eq!(numbers(WinLine::Row2), [4, 5, 6]);
        assert_eq!(numbers(WinLine::Column3), [3, 6, 9]);
        assert_eq!(numbers(WinLine::Diagonal), [1, 5, 9]);
        assert_eq!(numbers(WinLine::AntiDiagonal), [3, 5, 7]);
        for (line, cells) in WIN_LINES {
            assert_eq!(line.cells(), cells);
        }
    }

    #[test]
    fn test_every_line_detected_for_both_marks() {
        for mark in [Mark::O, Mark::X] {
            for line in WinLine::iter() {
                let board = board_with(mark, &line.cells());
                assert_eq!(check_win(&board, mark), Some(line));
                assert_eq!(check_win(&board, mark.opponent()), None);
            }
        }
    }

    #[test]
    fn test_priority_prefers_rows_then_columns_then_diagonals() {
        // Top row and left column share cell 1.
        let board = board_with(
            Mark::X,
            &[
                CellId::TOP_LEFT,
                CellId::TOP_CENTER,
                CellId::TOP_RIGHT,
                CellId::MIDDLE_LEFT,
                CellId::BOTTOM_LEFT,
            ],
        );
        assert_eq!(check_win(&board, Mark::X), Some(WinLine::Row1));

        // Middle row, center column and both diagonals through cell 5.
        let board = board_with(
            Mark::O,
            &[
                CellId::TOP_LEFT,
                CellId::TOP_CENTER,
                CellId::TOP_RIGHT,
                CellId::MIDDLE_LEFT,
                CellId::CENTER,
                CellId::MIDDLE_RIGHT,
                CellId::BOTTOM_LEFT,
                CellId::BOTTOM_CENTER,
                CellId::BOTTOM_RIGHT,
            ],
        );
        assert_eq!(check_win(&board, Mark::O), Some(WinLine::Row1));

        let board = board_with(
            Mark::O,
            &[
                CellId::TOP_CENTER,
                CellId::CENTER,
                CellId::BOTTOM_CENTER,
                CellId::TOP_LEFT,
                CellId::BOTTOM_RIGHT,
            ],
        );
        assert_eq!(check_win(&board, Mark::O), Some(WinLine::Column2));
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let board = board_with(Mark::X, &[CellId::TOP_LEFT, CellId::TOP_CENTER]);
        assert_eq!(check_win(&board, Mark::X), None);
    }

    #[test]
    fn test_contains() {
        assert!(WinLine::Diagonal.contains(CellId::CENTER));
        assert!(!WinLine::Diagonal.contains(CellId::TOP_RIGHT));
    }
}
