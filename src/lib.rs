//! # Guess Number
//!
//! Console "guess the number" game with two difficulty levels.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        GUESS NUMBER                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Primitives                               │
//! │  └── rng.rs       - Number source, seeded Xoroshiro128+      │
//! │                                                              │
//! │  game/            - Game logic                               │
//! │  ├── profile.rs   - Easy / Hard difficulty profiles          │
//! │  ├── evaluator.rs - Guess comparison and hints               │
//! │  ├── state.rs     - Session counters and phases              │
//! │  ├── input.rs     - Guess parsing                            │
//! │  ├── session.rs   - The game loop                            │
//! │  └── events.rs    - Session event log                        │
//! │                                                              │
//! │  app.rs           - Difficulty menu and session wiring       │
//! │  config.rs        - Command line flags                       │
//! │  error.rs         - Error type                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every collaborator of the loop is injected: the number source, the
//! evaluator, and the console reader/writer. A fixed source plus an
//! in-memory cursor replays any game exactly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use config::{AppConfig, Cli};
pub use crate::core::rng::{DeterministicRng, NumberSource};
pub use error::GameError;
pub use game::evaluator::{GuessEvaluator, NumberEvaluator};
pub use game::profile::{Difficulty, DifficultyProfile};
pub use game::session::{GameSession, SessionOutcome, SessionReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
