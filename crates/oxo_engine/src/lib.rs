//! Pure tic-tac-toe logic for a session of repeated rounds.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns one [`GameState`] snapshot and applies
//!   [`Action`]s to it
//! - **Rules**: the fixed [`WIN_LINES`] table and draw detection
//! - **Contracts**: pre/postconditions and snapshot invariants checked in
//!   debug builds
//! - **Store**: [`GameStore`] publishes a snapshot per accepted action
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Action, GameEngine, Mark, WinLine};
//!
//! let mut engine = GameEngine::new();
//! for cell in [1, 4, 2, 5, 3] {
//!     engine.dispatch(Action::TapCell(cell))?;
//! }
//!
//! let state = engine.snapshot();
//! assert!(state.has_won());
//! assert_eq!(state.win_line(), Some(WinLine::Row1));
//! assert_eq!(state.score(Mark::O), 1);
//! assert_eq!(state.current_turn(), None);
//! # Ok::<(), oxo_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
pub mod contracts;
mod engine;
mod error;
pub mod invariants;
pub mod rules;
mod state;
mod store;
mod types;

// Crate-level exports - Actions
pub use action::{Action, IgnoreReason, Transition};

// Crate-level exports - Board
pub use cell::CellId;
pub use types::{Board, Cell, Mark};

// Crate-level exports - Rules
pub use rules::{WIN_LINES, WinLine};

// Crate-level exports - Engine
pub use engine::GameEngine;
pub use error::{EngineError, EngineErrorKind};
pub use state::{GameState, Hint};
pub use store::GameStore;
