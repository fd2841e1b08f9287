//! Game Logic Module
//!
//! ## Module Structure
//!
//! - `profile`: Difficulty profiles and menu selection
//! - `evaluator`: Guess comparison and hint text
//! - `state`: Session counters and phases
//! - `input`: Line reading and guess parsing
//! - `session`: The game loop
//! - `events`: Session event log

pub mod profile;
pub mod evaluator;
pub mod state;
pub mod input;
pub mod session;
pub mod events;

// Re-export key types
pub use profile::{Difficulty, DifficultyProfile};
pub use evaluator::{GuessEvaluator, GuessOutcome, NumberEvaluator, hint_for};
pub use state::{GamePhase, SessionState};
pub use session::{GameSession, SessionOutcome, SessionReport};
pub use events::{GameEvent, GameEventData};
