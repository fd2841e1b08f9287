//! Game Errors
//!
//! One error type for the whole library. Only `InvalidInput` is
//! recoverable inside a session; everything else ends it.

use std::num::ParseIntError;

/// Game errors.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Top-level difficulty choice not recognized.
    #[error("Invalid selection: {0:?}")]
    InvalidSelection(String),

    /// A guess could not be parsed as an integer.
    #[error("Invalid input: {input:?} is not a whole number")]
    InvalidInput {
        /// The offending line, trimmed.
        input: String,
        /// Parser failure.
        #[source]
        source: ParseIntError,
    },

    /// An operation was called out of order.
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// Empty or inverted number range.
    #[error("Invalid range: [{min}, {max})")]
    InvalidRange {
        /// Inclusive lower bound.
        min: i32,
        /// Exclusive upper bound.
        max: i32,
    },

    /// Profile values break the profile contract.
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Standard input reached end of file while a prompt was pending.
    #[error("Input closed")]
    InputClosed,

    /// Reading or writing the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether the game loop may re-prompt after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_invalid_input_is_recoverable() {
        let source = "x".parse::<i32>().unwrap_err();
        let err = GameError::InvalidInput { input: "x".into(), source };
        assert!(err.is_recoverable());

        assert!(!GameError::InvalidSelection("3".into()).is_recoverable());
        assert!(!GameError::InvalidState("no target").is_recoverable());
        assert!(!GameError::InputClosed.is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidRange { min: 5, max: 5 };
        assert_eq!(err.to_string(), "Invalid range: [5, 5)");

        let err = GameError::InvalidSelection("3".into());
        assert_eq!(err.to_string(), "Invalid selection: \"3\"");
    }
}
