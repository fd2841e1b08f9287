//! Session State Definitions
//!
//! Mutable state of one play-through and the phases it moves through.

use serde::{Serialize, Deserialize};

use crate::game::profile::DifficultyProfile;

/// Phase of a session.
///
/// `Init -> AwaitingGuess -> Evaluating -> AwaitingGuess | Won | Lost`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Target not drawn yet
    #[default]
    Init,
    /// Waiting for the player to type a guess
    AwaitingGuess,
    /// A parsed guess is being judged
    Evaluating { guess: i32 },
    /// Target found
    Won,
    /// Lives exhausted
    Lost,
}

impl GamePhase {
    /// Won or Lost.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Per-session counters. Discarded when the session ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Hidden number, within the profile bounds
    pub target: i32,

    /// Guesses left
    pub remaining_life: u32,

    /// Guesses evaluated so far
    pub attempt_count: u32,

    /// Set once the target has been hit
    pub solved: bool,
}

impl SessionState {
    /// Fresh state for `target` under `profile`.
    pub fn new(target: i32, profile: &DifficultyProfile) -> Self {
        Self {
            target,
            remaining_life: profile.starting_life(),
            attempt_count: 0,
            solved: false,
        }
    }

    /// Count one evaluated guess.
    pub fn record_attempt(&mut self) {
        self.attempt_count += 1;
        self.remaining_life = self.remaining_life.saturating_sub(1);
    }

    /// No guesses left.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining_life == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_uses_profile_life() {
        let state = SessionState::new(42, &DifficultyProfile::easy());
        assert_eq!(state.remaining_life, 12);
        assert_eq!(state.attempt_count, 0);
        assert!(!state.solved);
    }

    #[test]
    fn test_record_attempt_never_underflows() {
        let profile = DifficultyProfile::new("One", 0, 10, 1, "").unwrap();
        let mut state = SessionState::new(5, &profile);

        state.record_attempt();
        assert!(state.is_exhausted());
        state.record_attempt();
        assert_eq!(state.remaining_life, 0);
        assert_eq!(state.attempt_count, 2);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::Won.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
        assert!(!GamePhase::Init.is_terminal());
        assert!(!GamePhase::AwaitingGuess.is_terminal());
        assert!(!GamePhase::Evaluating { guess: 1 }.is_terminal());
    }
}
