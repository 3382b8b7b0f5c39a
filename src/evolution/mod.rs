pub mod challenge;
pub mod launcher;
pub mod options;

pub use challenge::{Challenge, Evaluation, KnapsackChallenge};
pub use launcher::{EvolutionLauncher, EvolutionResult, UnboundedSolver, ZeroOneSolver};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
