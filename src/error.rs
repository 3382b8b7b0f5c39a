//! # Error Types
//!
//! This module defines the error type shared by every part of the solver.
//! Invalid problems and invalid configurations are reported before the first
//! generation runs; the remaining variants cover failures inside the
//! evolutionary loop.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use knapsack_ga::error::{GeneticError, Result};
//! use knapsack_ga::problem::Problem;
//!
//! fn build() -> Result<Problem> {
//!     Problem::from_pairs(&[(2, 3), (3, 4)], 5)
//! }
//!
//! match Problem::from_pairs(&[], 5) {
//!     Err(GeneticError::InvalidProblem(msg)) => assert!(msg.contains("at least one item")),
//!     _ => unreachable!(),
//! }
//! assert!(build().is_ok());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use knapsack_ga::error::{GeneticError, OptionExt};
//!
//! fn best_value(values: &[u64]) -> knapsack_ga::error::Result<u64> {
//!     values.iter().max().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_value(&[3, 7, 5]).unwrap(), 7);
//! assert!(best_value(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while building or solving a knapsack problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticError {
    /// The problem instance itself is unusable (no items, zero capacity, zero-weight item).
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
