//! Entry Point Logic
//!
//! Difficulty selection and session wiring, behind plain reader/writer
//! parameters so the binary stays a thin shell.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::rng::NumberSource;
use crate::error::GameError;
use crate::game::evaluator::NumberEvaluator;
use crate::game::input::read_line;
use crate::game::profile::Difficulty;
use crate::game::session::{GameSession, SessionReport};

/// Difficulty menu prompt.
pub const SELECTION_PROMPT: &str = "Choose a difficulty level: 1 - Easy, 2 - Hard";

/// Printed for anything other than `1` or `2`.
pub const SELECTION_USAGE: &str = "Please choose 1 or 2";

/// Ask for a difficulty on `input`.
///
/// Prints the usage line and returns [`GameError::InvalidSelection`] on an
/// unrecognized answer.
pub fn select_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Difficulty, GameError> {
    writeln!(output, "{SELECTION_PROMPT}")?;
    output.flush()?;

    let line = read_line(input)?;
    match Difficulty::from_selection(&line) {
        Ok(difficulty) => Ok(difficulty),
        Err(err) => {
            warn!(selection = %line.trim(), "unrecognized difficulty");
            writeln!(output, "{SELECTION_USAGE}")?;
            Err(err)
        }
    }
}

/// Resolve the difficulty, then play one session to completion.
pub fn run<S, R, W>(
    config: &AppConfig,
    source: S,
    input: &mut R,
    output: &mut W,
) -> Result<SessionReport, GameError>
where
    S: NumberSource,
    R: BufRead,
    W: Write,
{
    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => select_difficulty(input, output)?,
    };
    info!(%difficulty, "starting session");

    let mut session = GameSession::new(difficulty.profile(), source, NumberEvaluator::new());
    session.run(input, output)?;
    session.report()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::core::rng::DeterministicRng;

    /// Counts draws so tests can tell whether a session started.
    struct CountingSource {
        value: i32,
        calls: u32,
    }

    impl NumberSource for CountingSource {
        fn generate(&mut self, _min: i32, _max: i32) -> Result<i32, GameError> {
            self.calls += 1;
            Ok(self.value)
        }
    }

    fn run_with(config: &AppConfig, source: &mut CountingSource, lines: &str) -> (Result<SessionReport, GameError>, String) {
        let mut input = Cursor::new(lines.to_string());
        let mut output = Vec::new();
        let result = run(config, source, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_invalid_selection_runs_no_session() {
        let mut source = CountingSource { value: 1, calls: 0 };
        let (result, output) = run_with(&AppConfig::default(), &mut source, "3\n1\n");

        assert!(matches!(result, Err(GameError::InvalidSelection(ref s)) if s == "3"));
        assert_eq!(output, format!("{SELECTION_PROMPT}\n{SELECTION_USAGE}\n"));
        assert_eq!(source.calls, 0);
    }

    #[test]
    fn test_selection_one_plays_easy() {
        let mut source = CountingSource { value: 42, calls: 0 };
        let (result, output) = run_with(&AppConfig::default(), &mut source, "1\n10\n60\n42\n");

        let report = result.unwrap();
        assert_eq!(report.difficulty, "Easy");
        assert_eq!(report.outcome.attempts(), 3);
        assert!(output.contains("Easy level selected"));
        assert_eq!(source.calls, 1);
    }

    #[test]
    fn test_selection_two_plays_hard() {
        let mut source = CountingSource { value: 150, calls: 0 };
        let (result, output) = run_with(&AppConfig::default(), &mut source, "2\n150\n");

        assert_eq!(result.unwrap().difficulty, "Hard");
        assert!(output.contains("Guess a number between 0 and 200"));
    }

    #[test]
    fn test_preselected_difficulty_skips_menu() {
        let config = AppConfig {
            difficulty: Some(Difficulty::Hard),
            ..AppConfig::default()
        };
        let mut source = CountingSource { value: 5, calls: 0 };
        let (result, output) = run_with(&config, &mut source, "5\n");

        assert!(result.unwrap().outcome.is_win());
        assert!(!output.contains(SELECTION_PROMPT));
    }

    #[test]
    fn test_empty_input_at_menu() {
        let mut source = CountingSource { value: 1, calls: 0 };
        let (result, _) = run_with(&AppConfig::default(), &mut source, "");
        assert!(matches!(result, Err(GameError::InputClosed)));
    }

    #[test]
    fn test_seeded_runs_share_target() {
        let config = AppConfig {
            difficulty: Some(Difficulty::Easy),
            ..AppConfig::default()
        };
        let mut targets = Vec::new();
        for _ in 0..2 {
            let lines: String = (0..100).map(|g| format!("{g}\n")).collect();
            let mut output = Vec::new();
            let report = run(&config, DeterministicRng::new(7), &mut Cursor::new(lines), &mut output).unwrap();
            targets.push(report.target);
        }
        assert_eq!(targets, vec![91, 91]);
    }
}
