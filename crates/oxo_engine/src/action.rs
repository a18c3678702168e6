//! Actions the engine accepts and the transitions they produce.
//!
//! Actions are user intent coming from the front end. They carry raw input
//! (a tapped cell number) and are validated by the engine on dispatch.

use crate::cell::CellId;
use crate::rules::WinLine;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Something the player did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The player tapped a cell, numbered 1-9.
    TapCell(i32),
    /// The player asked for another round.
    Reset,
}

impl Action {
    /// Tap action for a known-good cell.
    pub fn tap(cell: CellId) -> Self {
        Action::TapCell(i32::from(cell.number()))
    }
}

impl From<CellId> for Action {
    fn from(cell: CellId) -> Self {
        Action::tap(cell)
    }
}

/// Why a tap was dropped without changing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The tapped cell already holds a mark.
    Occupied(CellId),
    /// The round has been won and the board is locked until reset.
    RoundOver,
}

/// What an accepted or ignored action did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// No-op. The snapshot is unchanged.
    Ignored(IgnoreReason),
    /// A mark was placed and the turn passed to the other player.
    Placed {
        /// Cell that was filled.
        cell: CellId,
        /// Mark that was placed.
        mark: Mark,
    },
    /// A mark was placed and completed a line.
    Won {
        /// Cell that was filled.
        cell: CellId,
        /// The winning mark.
        mark: Mark,
        /// The first completed line in priority order.
        line: WinLine,
    },
    /// A mark was placed and filled the board without a line.
    Drawn {
        /// Cell that was filled.
        cell: CellId,
        /// Mark that was placed.
        mark: Mark,
    },
    /// The board was cleared for a new round.
    Reset,
}

impl Transition {
    /// Returns true if the snapshot changed.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Transition::Ignored(_))
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Ignored(IgnoreReason::Occupied(cell)) => {
                write!(f, "ignored: cell {} is taken", cell)
            }
            Transition::Ignored(IgnoreReason::RoundOver) => write!(f, "ignored: round is over"),
            Transition::Placed { cell, mark } => write!(f, "{} -> {}", mark, cell.label()),
            Transition::Won { cell, mark, line } => {
                write!(f, "{} -> {} wins the {}", mark, cell.label(), line)
            }
            Transition::Drawn { cell, mark } => write!(f, "{} -> {} draws", mark, cell.label()),
            Transition::Reset => write!(f, "reset"),
        }
    }
}
