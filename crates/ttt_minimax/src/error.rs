//! Error types.

use crate::types::Action;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why an action could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidActionKind {
    /// The coordinate lies outside the board.
    #[display("{} is off the board", _0)]
    OutOfBounds(Action),
    /// The square is already occupied.
    #[display("square {} is already occupied", _0)]
    Occupied(Action),
    /// The board is already terminal.
    #[display("game is already over")]
    GameOver,
}

/// Raised by [`crate::apply`] when an action is not currently legal.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid action: {} at {}:{}", kind, file, line)]
pub struct InvalidActionError {
    /// What was wrong with the action.
    pub kind: InvalidActionKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidActionError {
    /// Creates a new invalid action error with caller location tracking.
    #[track_caller]
    #[instrument(level = "debug")]
    pub fn new(kind: InvalidActionKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Board or action text that could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Notation error: {} at {}:{}", message, file, line)]
pub struct NotationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl NotationError {
    /// Creates a new notation error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
