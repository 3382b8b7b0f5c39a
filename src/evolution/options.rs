//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every knob of a solver run: the number
//! of generations, population size, mutation rate, tournament size, how many
//! elites survive each generation, whether the best-fitness history is kept,
//! the logging level and the parallel evaluation threshold.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(100, 50, 0.05);
//! assert!(custom_options.validate().is_ok());
//!
//! // Or through the builder
//! let options = EvolutionOptions::builder()
//!     .num_generations(300)
//!     .population_size(80)
//!     .mutation_rate(0.02)
//!     .elite_count(2)
//!     .track_history(true)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert_eq!(options.get_elite_count(), 2);
//! ```
//!
//! ## Defaults
//!
//! 200 generations of 100 genomes with a mutation rate of 0.01, tournaments
//! of two, no elitism, no history, no logging, parallel evaluation from
//! 1000 genomes up.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Every generation summary plus every genome and its fitness.
    Verbose,
    /// One summary line per generation.
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    population_size: usize,
    mutation_rate: f64,
    tournament_size: usize,
    /// Genomes copied unchanged into the next generation
    elite_count: usize,
    track_history: bool,
    log_level: LogLevel,
    /// Minimum population size evaluated in parallel
    parallel_threshold: usize,
}

const DEFAULT_GENERATIONS: usize = 200;
const DEFAULT_POPULATION_SIZE: usize = 100;
const DEFAULT_MUTATION_RATE: f64 = 0.01;
const DEFAULT_TOURNAMENT_SIZE: usize = 2;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

impl EvolutionOptions {
    pub fn new(num_generations: usize, population_size: usize, mutation_rate: f64) -> Self {
        Self {
            num_generations,
            population_size,
            mutation_rate,
            ..Self::default()
        }
    }

    /// Checks every option before a run starts.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if:
    /// - the number of generations or the population size is zero
    /// - the mutation rate is not a finite number in `[0, 1]`
    /// - the tournament size is zero or larger than the population
    /// - the elite count leaves no room for offspring
    pub fn validate(&self) -> Result<()> {
        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if !self.mutation_rate.is_finite() || !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }

        if self.tournament_size == 0 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        if self.tournament_size > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size, self.population_size
            )));
        }

        if self.elite_count >= self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Elite count ({}) must be smaller than the population size ({})",
                self.elite_count, self.population_size
            )));
        }

        Ok(())
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_elite_count(&self) -> usize {
        self.elite_count
    }

    pub fn get_track_history(&self) -> bool {
        self.track_history
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Returns the minimum population size evaluated in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Number of genomes bred each generation, so that elites plus offspring
    /// always add up to the population size.
    pub fn offspring_per_generation(&self) -> usize {
        self.population_size.saturating_sub(self.elite_count)
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    pub fn set_elite_count(&mut self, elite_count: usize) {
        self.elite_count = elite_count;
    }

    pub fn set_track_history(&mut self, track_history: bool) {
        self.track_history = track_history;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: DEFAULT_GENERATIONS,
            population_size: DEFAULT_POPULATION_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            elite_count: 0,
            track_history: false,
            log_level: LogLevel::None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the `EvolutionOptions` defaults.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    tournament_size: Option<usize>,
    elite_count: Option<usize>,
    track_history: Option<bool>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn elite_count(mut self, value: usize) -> Self {
        self.elite_count = Some(value);
        self
    }

    pub fn track_history(mut self, value: bool) -> Self {
        self.track_history = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            population_size: self.population_size.unwrap_or(default.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            tournament_size: self.tournament_size.unwrap_or(default.tournament_size),
            elite_count: self.elite_count.unwrap_or(default.elite_count),
            track_history: self.track_history.unwrap_or(default.track_history),
            log_level: self.log_level.unwrap_or(default.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(default.parallel_threshold),
        }
    }
}
