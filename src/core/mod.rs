//! Core primitives.
//!
//! The number source lives here so the game logic can be driven by a
//! seeded generator in production and a fixed stub in tests.

pub mod rng;

// Re-export core types
pub use rng::{DeterministicRng, NumberSource};
