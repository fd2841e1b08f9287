//! Command Line Configuration

use clap::Parser;

use crate::game::profile::Difficulty;

/// Default tracing filter. Keeps diagnostics off the console during play.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command line flags.
#[derive(Parser, Debug, Clone)]
#[command(name = "guess-number", version, about = "Guess the hidden number before your lives run out")]
pub struct Cli {
    /// Skip the menu and play this level
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Seed for a reproducible target
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tracing filter directive, written to stderr
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Preselected level; `None` shows the menu.
    pub difficulty: Option<Difficulty>,
    /// Number source seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Tracing filter directive.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            difficulty: None,
            seed: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            difficulty: cli.difficulty,
            seed: cli.seed,
            log_level: cli.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_default() {
        let cli = Cli::try_parse_from(["guess-number"]).unwrap();
        assert_eq!(AppConfig::from(cli), AppConfig::default());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "guess-number",
            "--difficulty",
            "hard",
            "--seed",
            "42",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = AppConfig::from(cli);
        assert_eq!(config.difficulty, Some(Difficulty::Hard));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(Cli::try_parse_from(["guess-number", "--difficulty", "medium"]).is_err());
    }
}
