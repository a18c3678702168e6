//! Cell identifiers for the 3x3 board.

use crate::error::{EngineError, EngineErrorKind};
use serde::{Deserialize, Serialize};

/// A cell on the board, numbered 1-9 in row-major order.
///
/// ```text
/// 1 | 2 | 3
/// 4 | 5 | 6
/// 7 | 8 | 9
/// ```
///
/// A `CellId` can only be built from a value in 1..=9, so every id in
/// circulation addresses a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CellId(u8);

impl CellId {
    /// Top-left (cell 1).
    pub const TOP_LEFT: CellId = CellId(1);
    /// Top-center (cell 2).
    pub const TOP_CENTER: CellId = CellId(2);
    /// Top-right (cell 3).
    pub const TOP_RIGHT: CellId = CellId(3);
    /// Middle-left (cell 4).
    pub const MIDDLE_LEFT: CellId = CellId(4);
    /// Center (cell 5).
    pub const CENTER: CellId = CellId(5);
    /// Middle-right (cell 6).
    pub const MIDDLE_RIGHT: CellId = CellId(6);
    /// Bottom-left (cell 7).
    pub const BOTTOM_LEFT: CellId = CellId(7);
    /// Bottom-center (cell 8).
    pub const BOTTOM_CENTER: CellId = CellId(8);
    /// Bottom-right (cell 9).
    pub const BOTTOM_RIGHT: CellId = CellId(9);

    /// All 9 cells in row-major order.
    pub const ALL: [CellId; 9] = [
        CellId::TOP_LEFT,
        CellId::TOP_CENTER,
        CellId::TOP_RIGHT,
        CellId::MIDDLE_LEFT,
        CellId::CENTER,
        CellId::MIDDLE_RIGHT,
        CellId::BOTTOM_LEFT,
        CellId::BOTTOM_CENTER,
        CellId::BOTTOM_RIGHT,
    ];

    /// Creates a cell id from its number (1-9).
    #[track_caller]
    pub fn new(number: i32) -> Result<Self, EngineError> {
        match u8::try_from(number) {
            Ok(n @ 1..=9) => Ok(Self(n)),
            _ => Err(EngineError::new(EngineErrorKind::InvalidInput(number))),
        }
    }

    /// Creates a cell id from a 0-based board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The cell number (1-9).
    pub fn number(self) -> u8 {
        self.0
    }

    /// The 0-based board index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column, 0 at the left.
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// The cell at `row`/`column`, if both are in 0..3.
    pub fn at(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// Label for this cell (for display).
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Top-left",
            2 => "Top-center",
            3 => "Top-right",
            4 => "Middle-left",
            5 => "Center",
            6 => "Middle-right",
            7 => "Bottom-left",
            8 => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl TryFrom<u8> for CellId {
    type Error = EngineError;

    #[track_caller]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<CellId> for u8 {
    fn from(cell: CellId) -> Self {
        cell.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
