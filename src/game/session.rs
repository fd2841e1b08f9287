//! Game Session
//!
//! The game loop. Each call to [`GameSession::step`] performs the work of
//! the current phase and returns the next one; [`GameSession::run`] steps
//! until the session is won or lost.

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::core::rng::NumberSource;
use crate::error::GameError;
use crate::game::evaluator::{GuessEvaluator, GuessOutcome};
use crate::game::events::{GameEvent, GameEventData};
use crate::game::input::{parse_guess, read_line};
use crate::game::profile::DifficultyProfile;
use crate::game::state::{GamePhase, SessionState};

/// Printed when the player runs out of lives.
pub const LOSS_MESSAGE: &str = "Better luck next time!";

/// How a finished session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SessionOutcome {
    /// Target guessed
    Won {
        /// Guesses used, including the correct one
        attempts: u32,
        /// Lives left after the correct guess
        remaining_life: u32,
    },
    /// Lives exhausted
    Lost {
        /// Guesses used
        attempts: u32,
    },
}

impl SessionOutcome {
    /// Guesses evaluated during the session.
    pub fn attempts(&self) -> u32 {
        match *self {
            SessionOutcome::Won { attempts, .. } | SessionOutcome::Lost { attempts } => attempts,
        }
    }

    /// True for `Won`.
    pub fn is_win(&self) -> bool {
        matches!(self, SessionOutcome::Won { .. })
    }
}

/// Summary of a finished session.
#[derive(Clone, Debug, Serialize)]
pub struct SessionReport {
    /// Session identifier.
    pub id: Uuid,
    /// Profile name.
    pub difficulty: String,
    /// Inclusive lower bound.
    pub min_bound: i32,
    /// Exclusive upper bound.
    pub max_bound: i32,
    /// The hidden number.
    pub target: i32,
    /// Terminal outcome.
    pub outcome: SessionOutcome,
    /// Event log.
    pub events: Vec<GameEvent>,
    /// Session start.
    pub started_at: DateTime<Utc>,
    /// Session end.
    pub finished_at: DateTime<Utc>,
}

/// One play-through with injected number source and evaluator.
pub struct GameSession<S, E> {
    id: Uuid,
    profile: DifficultyProfile,
    source: S,
    evaluator: E,
    phase: GamePhase,
    state: Option<SessionState>,
    events: Vec<GameEvent>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl<S: NumberSource, E: GuessEvaluator> GameSession<S, E> {
    /// Create a session in the `Init` phase.
    pub fn new(profile: DifficultyProfile, source: S, evaluator: E) -> Self {
        Self {
            id: Uuid::new_v4(),
            profile,
            source,
            evaluator,
            phase: GamePhase::Init,
            state: None,
            events: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Active profile.
    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Counters, once the target has been drawn.
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Events so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Play the session to a terminal phase.
    ///
    /// Malformed guesses are reported and re-prompted. Any other error
    /// aborts the session and is returned.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionOutcome, GameError> {
        if self.phase.is_terminal() {
            return Err(GameError::InvalidState("session already finished"));
        }

        let span = info_span!("session", id = %self.id, difficulty = self.profile.name());
        let _enter = span.enter();

        while !self.phase.is_terminal() {
            self.step(input, output)?;
        }
        self.finished_at = Some(Utc::now());

        let outcome = self
            .outcome()
            .ok_or(GameError::InvalidState("terminal phase without state"))?;
        info!(?outcome, "session finished");
        Ok(outcome)
    }

    /// Perform the current phase, move to the next one and return it.
    ///
    /// On error the phase is left unchanged.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<GamePhase, GameError> {
        let next = match self.phase {
            GamePhase::Init => self.start(output)?,
            GamePhase::AwaitingGuess => self.await_guess(input, output)?,
            GamePhase::Evaluating { guess } => self.evaluate(guess, output)?,
            GamePhase::Won | GamePhase::Lost => self.phase,
        };
        self.phase = next;
        Ok(next)
    }

    /// Terminal outcome, if the session has ended.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        let state = self.state.as_ref()?;
        match self.phase {
            GamePhase::Won => Some(SessionOutcome::Won {
                attempts: state.attempt_count,
                remaining_life: state.remaining_life,
            }),
            GamePhase::Lost => Some(SessionOutcome::Lost {
                attempts: state.attempt_count,
            }),
            _ => None,
        }
    }

    /// Summary of a finished session.
    pub fn report(&self) -> Result<SessionReport, GameError> {
        let outcome = self
            .outcome()
            .ok_or(GameError::InvalidState("session not finished"))?;
        let state = self
            .state
            .as_ref()
            .ok_or(GameError::InvalidState("session not started"))?;
        Ok(SessionReport {
            id: self.id,
            difficulty: self.profile.name().to_string(),
            min_bound: self.profile.min_bound(),
            max_bound: self.profile.max_bound(),
            target: state.target,
            outcome,
            events: self.events.clone(),
            started_at: self.started_at,
            finished_at: self.finished_at.unwrap_or_else(Utc::now),
        })
    }

    // =========================================================================
    // PHASES
    // =========================================================================

    fn start<W: Write>(&mut self, output: &mut W) -> Result<GamePhase, GameError> {
        let min = self.profile.min_bound();
        let max = self.profile.max_bound();

        let target = self.source.generate(min, max)?;
        if !(min..max).contains(&target) {
            return Err(GameError::InvalidState("number source returned a value out of range"));
        }
        self.evaluator.set_target(target)?;
        self.state = Some(SessionState::new(target, &self.profile));
        self.events.push(GameEvent::new(GameEventData::TargetDrawn {
            min_bound: min,
            max_bound: max,
        }));
        debug!(target, "target drawn");

        writeln!(output, "{}", self.profile.welcome_message())?;
        writeln!(output, "Guess a number between {min} and {max}")?;
        Ok(GamePhase::AwaitingGuess)
    }

    fn await_guess<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<GamePhase, GameError> {
        let remaining_life = match &self.state {
            Some(state) => state.remaining_life,
            None => {
                return Err(GameError::InvalidState("awaiting a guess before the target is drawn"))
            }
        };
        if remaining_life == 0 {
            return self.finish_lost(output);
        }

        write!(output, "Enter your guess ({remaining_life} attempts left): ")?;
        output.flush()?;

        let line = read_line(input)?;
        match parse_guess(&line) {
            Ok(guess) => Ok(GamePhase::Evaluating { guess }),
            Err(GameError::InvalidInput { input: rejected, .. }) => {
                warn!(input = %rejected, "rejected guess");
                writeln!(output, "{rejected:?} is not a whole number, try again")?;
                self.events.push(GameEvent::new(GameEventData::InputRejected { input: rejected }));
                Ok(GamePhase::AwaitingGuess)
            }
            Err(err) => Err(err),
        }
    }

    fn evaluate<W: Write>(&mut self, guess: i32, output: &mut W) -> Result<GamePhase, GameError> {
        let ordering = self.evaluator.compare(guess)?;
        let solved = self.evaluator.is_solved();

        let Some(state) = self.state.as_mut() else {
            return Err(GameError::InvalidState("evaluating before the target is drawn"));
        };
        state.record_attempt();
        state.solved = solved;

        let outcome = GuessOutcome::from(ordering);
        debug!(
            attempt = state.attempt_count,
            guess,
            ?outcome,
            remaining_life = state.remaining_life,
            "guess evaluated"
        );
        self.events.push(GameEvent::new(GameEventData::GuessEvaluated {
            attempt: state.attempt_count,
            guess,
            outcome,
            remaining_life: state.remaining_life,
        }));
        if let Some(hint) = outcome.hint() {
            writeln!(output, "{hint}")?;
        }

        if solved {
            let attempts = state.attempt_count;
            let noun = if attempts == 1 { "attempt" } else { "attempts" };
            writeln!(output, "Congratulations, you guessed the number in {attempts} {noun}!")?;
            self.events.push(GameEvent::new(GameEventData::Won { attempts }));
            Ok(GamePhase::Won)
        } else if state.is_exhausted() {
            self.finish_lost(output)
        } else {
            Ok(GamePhase::AwaitingGuess)
        }
    }

    fn finish_lost<W: Write>(&mut self, output: &mut W) -> Result<GamePhase, GameError> {
        let attempts = self.state.as_ref().map_or(0, |s| s.attempt_count);
        writeln!(output, "{LOSS_MESSAGE}")?;
        self.events.push(GameEvent::new(GameEventData::Lost { attempts }));
        Ok(GamePhase::Lost)
    }
}

// =============================================================================
// TESTS
// =============================================================================
