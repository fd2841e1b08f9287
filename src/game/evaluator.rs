//! Guess Evaluation
//!
//! Compares guesses against the hidden target. The evaluator performs no
//! I/O; hint text comes from [`hint_for`] and is printed by the session.

use std::cmp::Ordering;

use serde::{Serialize, Deserialize};

use crate::error::GameError;

/// Capability that holds the target and judges guesses.
pub trait GuessEvaluator {
    /// Fix the target for this session. Must be called exactly once.
    fn set_target(&mut self, target: i32) -> Result<(), GameError>;

    /// Order `guess` relative to the target.
    ///
    /// `Greater` means the guess is above the target. `Equal` marks the
    /// evaluator solved for the rest of the session.
    fn compare(&mut self, guess: i32) -> Result<Ordering, GameError>;

    /// True once any comparison hit the target.
    fn is_solved(&self) -> bool;
}

/// Default evaluator.
#[derive(Clone, Debug, Default)]
pub struct NumberEvaluator {
    target: Option<i32>,
    solved: bool,
}

impl NumberEvaluator {
    /// Create an evaluator with no target yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuessEvaluator for NumberEvaluator {
    fn set_target(&mut self, target: i32) -> Result<(), GameError> {
        if self.target.is_some() {
            return Err(GameError::InvalidState("target already set for this session"));
        }
        self.target = Some(target);
        Ok(())
    }

    fn compare(&mut self, guess: i32) -> Result<Ordering, GameError> {
        let target = self
            .target
            .ok_or(GameError::InvalidState("compare called before set_target"))?;
        let ordering = guess.cmp(&target);
        if ordering == Ordering::Equal {
            self.solved = true;
        }
        Ok(ordering)
    }

    fn is_solved(&self) -> bool {
        self.solved
    }
}

// =============================================================================
// HINTS
// =============================================================================

/// Result of one guess, from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Guess above the target
    TooHigh,
    /// Guess below the target
    TooLow,
    /// Exact match
    Correct,
}

impl From<Ordering> for GuessOutcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => GuessOutcome::TooHigh,
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Equal => GuessOutcome::Correct,
        }
    }
}

impl GuessOutcome {
    /// Feedback line, phrased as where the target lies relative to the guess.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            GuessOutcome::TooHigh => Some("Less: your guess is too high"),
            GuessOutcome::TooLow => Some("Greater: your guess is too low"),
            GuessOutcome::Correct => None,
        }
    }
}

/// Hint line for a comparison, `None` on a match.
pub fn hint_for(ordering: Ordering) -> Option<&'static str> {
    GuessOutcome::from(ordering).hint()
}
