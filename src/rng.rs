//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a
//! solver run. Every stochastic operation (initial genomes, tournaments,
//! crossover cuts, mutations) draws from the generator it is handed, so a
//! launcher seeded with [`RandomNumberGenerator::from_seed`] is reproducible.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(7);
//! let mut b = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(a.gen_range_inclusive(0, 100), b.gen_range_inclusive(0, 100));
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that exposes the draws the
/// genetic operators need.
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
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns `true` with probability `probability`.
    ///
    /// `probability` must lie in `[0, 1]`; the evolution options validate
    /// the mutation rate before it ever reaches this call.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Fair coin flip.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Uniform integer in `[low, high]`.
    pub fn gen_range_inclusive(&mut self, low: u64, high: u64) -> u64 {
        self.rng.gen_range(low..=high)
    }

    /// Uniform index in `[low, high)`.
    pub fn gen_index(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..high)
    }

    /// Draws `amount` distinct indices from `0..length`, in draw order.
    ///
    /// # Panics
    ///
    /// Panics if `amount > length`. Callers check the tournament size against
    /// the population size first.
    pub fn sample_distinct(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount).into_vec()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
