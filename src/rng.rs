//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the random source every solver run
//! owns. It wraps `rand`'s `StdRng` so that a run seeded with the same value
//! replays exactly, and it is passed by `&mut` into every stochastic operator
//! instead of relying on process-wide state.
//!
//! ## Example
//!
//! ```rust
//! use salesman::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(7);
//! let mut b = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(a.gen_index(100), b.gen_index(100));
//! assert_eq!(a.gen_probability(), b.gen_probability());
//! ```

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the
/// solvers need.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from `seed` when present, otherwise from the system entropy.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::new(),
        }
    }

    /// Draws a probability uniformly from `[0, 1)`.
    pub fn gen_probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Draws an index uniformly from `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is 0.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Generates a random number in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Draws a real number uniformly from `[from, to)`.
    pub fn gen_uniform(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..to)
    }

    /// Shuffles `values` in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }

    /// Draws `amount` distinct indices from `[0, length)`, in draw order.
    ///
    /// # Panics
    ///
    /// Panics if `amount > length`.
    pub fn sample_distinct(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, length, amount).into_vec()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
