//! Random number generation for shuffling and random dealers.
//!
//! ## Generators
//!
//! - `GameRng`: seeded ChaCha8 stream for uniform shuffles and the random
//!   dealers (`FlipHalf`, `FlipRandom`, `RandomN`). Same seed, same deal.
//! - `DealRng`: the classic C library `rand()` LCG. Numbered deals shuffled
//!   with it match the well-known FreeCell deal numbers.
//!
//! ```
//! use solitaire_engine::core::{DealRng, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//!
//! let mut crand = DealRng::new(1);
//! assert_eq!(crand.next_value(), 41);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG for uniform shuffles and random dealers.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Equal seeds give equal shuffles and equal random deals.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A second stream derived from this seed and a label.
    ///
    /// Shuffling and dealing draw from separate streams so that adding a
    /// random dealer does not change the shuffle of a seeded game.
    #[must_use]
    pub fn for_context(&self, label: &str) -> Self {
        let mut state = rustc_hash::FxHasher::default();
        self.seed.hash(&mut state);
        label.hash(&mut state);
        Self::new(state.finish())
    }

    /// Index in `range`, used by the random dealers.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Coin flip weighted by `probability`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Uniform in-place shuffle of the undealt cards.
    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        cards.shuffle(&mut self.inner);
    }
}

/// Linear congruential generator matching the C library `rand()`.
///
/// `state = (214013 * state + 2531011) mod 2^31`, output `state >> 16`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DealRng {
    state: u32,
}

impl DealRng {
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance and return the next value in 0..32768.
    pub fn next_value(&mut self) -> u32 {
        let next = (214_013u64 * u64::from(self.state) + 2_531_011) % (1u64 << 31);
        self.state = next as u32;
        self.state >> 16
    }
}
