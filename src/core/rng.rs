//! Seeded randomness for problem generation and self-play.
//!
//! Every template draw takes a `&mut MathRng`; nothing in the crate
//! touches a global generator, so a seed pins down a whole match.
//!
//! ```
//! use tug_of_math::core::MathRng;
//!
//! let mut rng = MathRng::new(42);
//! let a = rng.range(1, 20);
//! assert!((1..=20).contains(&a));
//!
//! assert_eq!(MathRng::new(42).range(1, 20), a);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Golden-ratio increment used to spread branch seeds.
const BRANCH_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream plus the bookkeeping needed to branch and checkpoint it.
#[derive(Clone, Debug)]
pub struct MathRng {
    stream: ChaCha8Rng,
    seed: u64,
    branches: u64,
}

impl MathRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            branches: 0,
        }
    }

    /// Seeded from the thread-local OS-backed generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off a new stream. The n-th branch of a seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.branches += 1;
        Self::new(self.seed.wrapping_add(self.branches.wrapping_mul(BRANCH_STEP)))
    }

    /// Stream keyed by `(seed, context)`, independent of this stream's position.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Integer in the closed interval `[lo, hi]`.
    pub fn range(&mut self, lo: i64, hi: i64) -> i64 {
        self.stream.gen_range(lo..=hi)
    }

    /// Index in `0..len`.
    pub fn index(&mut self, len: usize) -> usize {
        self.stream.gen_range(0..len)
    }

    /// `true` with `probability`, clamped to `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.stream.gen_bool(probability.clamp(0.0, 1.0))
    }

    pub fn coin(&mut self) -> bool {
        self.stream.gen_bool(0.5)
    }

    /// Uniform in-place permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.stream);
    }

    /// Uniform element of a fixed table.
    ///
    /// # Panics
    ///
    /// Panics if `table` is empty.
    pub fn pick<T: Copy>(&mut self, table: &[T]) -> T {
        assert!(!table.is_empty(), "cannot pick from an empty table");
        table[self.index(table.len())]
    }

    #[must_use]
    pub fn state(&self) -> MathRngState {
        MathRngState {
            seed: self.seed,
            position: self.stream.get_word_pos(),
            branches: self.branches,
        }
    }

    #[must_use]
    pub fn from_state(state: &MathRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.stream.set_word_pos(state.position);
        rng.branches = state.branches;
        rng
    }
}

/// Checkpoint of a `MathRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathRngState {
    pub seed: u64,
    /// Word offset into the ChaCha8 keystream.
    pub position: u128,
    /// Number of `fork` calls made so far.
    pub branches: u64,
}
