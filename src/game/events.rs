//! Session Events
//!
//! Everything that happened in a session, in order. Carried in the
//! session report.

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::game::evaluator::GuessOutcome;

/// Event data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Target drawn from the number source
    TargetDrawn {
        min_bound: i32,
        max_bound: i32,
    },

    /// A line that did not parse as a guess
    InputRejected {
        input: String,
    },

    /// A guess was judged
    GuessEvaluated {
        attempt: u32,
        guess: i32,
        outcome: GuessOutcome,
        remaining_life: u32,
    },

    /// Session won
    Won {
        attempts: u32,
    },

    /// Session lost
    Lost {
        attempts: u32,
    },
}

/// A timestamped session event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameEvent {
    /// Wall-clock time of the event
    pub at: DateTime<Utc>,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create an event stamped now.
    pub fn new(data: GameEventData) -> Self {
        Self { at: Utc::now(), data }
    }
}
