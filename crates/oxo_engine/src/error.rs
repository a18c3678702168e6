//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// A cell id outside 1-9 was supplied.
    #[display("Cell {} is outside the board (expected 1-9)", _0)]
    InvalidInput(i32),

    /// A postcondition or invariant failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// The kind of failure.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns true if the error was caused by an out-of-range cell id.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind, EngineErrorKind::InvalidInput(_))
    }
}
