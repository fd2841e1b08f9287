//! Difficulty Profiles
//!
//! A profile is plain data: bounds, life, and welcome text. New levels are
//! new constructors; the game loop only ever sees a `DifficultyProfile`.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::error::GameError;

/// Immutable bundle of difficulty parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DifficultyProfile {
    name: Cow<'static, str>,
    min_bound: i32,
    max_bound: i32,
    starting_life: u32,
    welcome_message: Cow<'static, str>,
}

impl DifficultyProfile {
    /// Build a custom profile.
    ///
    /// Fails with [`GameError::InvalidProfile`] unless `min_bound < max_bound`
    /// and `starting_life > 0`.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        min_bound: i32,
        max_bound: i32,
        starting_life: u32,
        welcome_message: impl Into<Cow<'static, str>>,
    ) -> Result<Self, GameError> {
        if min_bound >= max_bound {
            return Err(GameError::InvalidProfile(format!(
                "min bound {min_bound} must be below max bound {max_bound}"
            )));
        }
        if starting_life == 0 {
            return Err(GameError::InvalidProfile(
                "starting life must be positive".to_string(),
            ));
        }
        Ok(Self {
            name: name.into(),
            min_bound,
            max_bound,
            starting_life,
            welcome_message: welcome_message.into(),
        })
    }

    /// Easy level: `[0, 100)`, 12 lives.
    pub const fn easy() -> Self {
        Self {
            name: Cow::Borrowed("Easy"),
            min_bound: 0,
            max_bound: 100,
            starting_life: 12,
            welcome_message: Cow::Borrowed("Easy level selected"),
        }
    }

    /// Hard level: `[0, 200)`, 8 lives.
    pub const fn hard() -> Self {
        Self {
            name: Cow::Borrowed("Hard"),
            min_bound: 0,
            max_bound: 200,
            starting_life: 8,
            welcome_message: Cow::Borrowed("Hard level selected"),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inclusive lower bound of the target.
    pub fn min_bound(&self) -> i32 {
        self.min_bound
    }

    /// Exclusive upper bound of the target.
    pub fn max_bound(&self) -> i32 {
        self.max_bound
    }

    /// Guesses allowed before the session is lost.
    pub fn starting_life(&self) -> u32 {
        self.starting_life
    }

    /// Text printed when the session starts.
    pub fn welcome_message(&self) -> &str {
        &self.welcome_message
    }
}

// =============================================================================
// DIFFICULTY SELECTION
// =============================================================================

/// Built-in difficulty levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Difficulty {
    /// Menu choice `1`
    Easy,
    /// Menu choice `2`
    Hard,
}

impl Difficulty {
    /// Parse a menu line. Only the literals `1` and `2` are accepted.
    pub fn from_selection(line: &str) -> Result<Self, GameError> {
        match line.trim() {
            "1" => Ok(Difficulty::Easy),
            "2" => Ok(Difficulty::Hard),
            other => Err(GameError::InvalidSelection(other.to_string())),
        }
    }

    /// Profile for this level.
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile::easy(),
            Difficulty::Hard => DifficultyProfile::hard(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles() {
        let easy = DifficultyProfile::easy();
        assert_eq!(easy.min_bound(), 0);
        assert_eq!(easy.max_bound(), 100);
        assert_eq!(easy.starting_life(), 12);
        assert_eq!(easy.welcome_message(), "Easy level selected");

        let hard = DifficultyProfile::hard();
        assert_eq!(hard.min_bound(), 0);
        assert_eq!(hard.max_bound(), 200);
        assert_eq!(hard.starting_life(), 8);
        assert_eq!(hard.welcome_message(), "Hard level selected");
    }

    #[test]
    fn test_custom_profile() {
        let profile = DifficultyProfile::new("Tiny", 1, 4, 2, String::from("Tiny level")).unwrap();
        assert_eq!(profile.name(), "Tiny");
        assert_eq!(profile.max_bound(), 4);
        assert_eq!(profile.welcome_message(), "Tiny level");
    }

    #[test]
    fn test_custom_profile_validation() {
        assert!(matches!(
            DifficultyProfile::new("Bad", 10, 10, 3, "x"),
            Err(GameError::InvalidProfile(_))
        ));
        assert!(matches!(
            DifficultyProfile::new("Bad", 0, 10, 0, "x"),
            Err(GameError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_selection_literals() {
        assert_eq!(Difficulty::from_selection("1").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_selection(" 2\n").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.profile(), DifficultyProfile::hard());
    }

    #[test]
    fn test_selection_rejects_others() {
        for line in ["3", "0", "", "easy", "1.0"] {
            assert!(matches!(
                Difficulty::from_selection(line),
                Err(GameError::InvalidSelection(_))
            ));
        }
    }
}
