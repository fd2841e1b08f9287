//! Number Source
//!
//! Uses the Xoroshiro128+ algorithm seeded through SplitMix64.
//! Given the same seed, produces identical targets on all platforms,
//! which is what lets tests and `--seed` replays pin the hidden number.

use serde::{Serialize, Deserialize};

use crate::error::GameError;

/// Capability that draws the hidden target.
///
/// Implementations must return a value in `[min, max)` and fail with
/// [`GameError::InvalidRange`] when `min >= max`.
pub trait NumberSource {
    /// Draw a value uniformly distributed over `[min, max)`.
    fn generate(&mut self, min: i32, max: i32) -> Result<i32, GameError>;
}

impl<T: NumberSource + ?Sized> NumberSource for &mut T {
    fn generate(&mut self, min: i32, max: i32) -> Result<i32, GameError> {
        (**self).generate(min, max)
    }
}

/// Seedable PRNG backing the default [`NumberSource`].
///
/// # Example
///
/// ```
/// use guess_number::core::rng::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// let value = rng.next_u64();
/// assert_eq!(value, 6233086606872742541); // Always the same!
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: [u64; 2],
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring
    /// good distribution even from weak seeds.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // Ensure state is never all zeros
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Create an RNG seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Generate a random integer in range [0, bound).
    ///
    /// Rejects draws below `2^64 mod bound` so every residue is equally likely.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_u64();
            if value >= threshold {
                return value % bound;
            }
        }
    }
}

impl NumberSource for DeterministicRng {
    fn generate(&mut self, min: i32, max: i32) -> Result<i32, GameError> {
        if min >= max {
            return Err(GameError::InvalidRange { min, max });
        }
        let span = (i64::from(max) - i64::from(min)) as u64;
        let offset = self.next_below(span) as i64;
        // min + offset < max, so it always fits back into i32
        Ok((i64::from(min) + offset) as i32)
    }
}

/// SplitMix64 for seed initialization.
/// Produces well-distributed values from sequential seeds.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

// =============================================================================
// TESTS
// =============================================================================
