//! Genetic algorithm solvers for the 0/1 and the unbounded knapsack problem.
//!
//! ```rust
//! use knapsack_ga::{EvolutionLauncher, Problem};
//!
//! let problem = Problem::from_pairs(&[(2, 3), (3, 4), (4, 5), (5, 6)], 5).unwrap();
//! let mut solver = EvolutionLauncher::zero_one(problem).with_seed(42);
//! let result = solver.evolution(100, 50, 0.01).unwrap();
//!
//! assert!(result.weight <= 5 || result.value == 0);
//! ```
pub mod error;
pub mod evolution;
pub mod genome;
pub mod population;
pub mod problem;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{
    EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel, UnboundedSolver,
    ZeroOneSolver,
};
pub use genome::{Gene, Genome};
pub use problem::{Item, Problem};
