//! Core domain types for a round of tic-tac-toe.

use crate::cell::CellId;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player O (moves first).
    O,
    /// Player X (moves second).
    X,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    /// Single-character symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::O => 'O',
            Mark::X => 'X',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (index 0 is cell 1).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given id.
    pub fn get(&self, cell: CellId) -> Cell {
        self.cells[cell.index()]
    }

    /// Places a mark. Only the engine writes to the board.
    pub(crate) fn set(&mut self, cell: CellId, value: Cell) {
        self.cells[cell.index()] = value;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: CellId) -> bool {
        self.get(cell).is_empty()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Iterates over `(id, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, Cell)> + '_ {
        CellId::ALL.into_iter().map(|id| (id, self.get(id)))
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Number of occupied cells.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their number so the grid doubles as a move guide.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (id, cell) in self.iter() {
            match cell {
                Cell::Empty => result.push_str(&id.to_string()),
                Cell::Occupied(mark) => result.push(mark.symbol()),
            }
            if id.column() < 2 {
                result.push('|');
            } else if id.row() < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
