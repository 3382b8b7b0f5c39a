use tracing::{debug, info, warn};

use super::{
    challenge::KnapsackChallenge,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{GeneticError, Result},
    genome::{Gene, Genome},
    population::Population,
    problem::Problem,
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, TournamentSelection},
    strategy::{KnapsackStrategy, UnboundedStrategy, ZeroOneStrategy},
};

/// The outcome of one evolution run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionResult<G: Gene> {
    /// The fittest genome of the final population.
    pub genome: Genome<G>,
    /// Its fitness: total value, or 0 if it does not fit.
    pub value: u64,
    /// Its total weight.
    pub weight: u64,
    /// Best fitness of each generation, when history tracking is enabled.
    pub history: Option<Vec<u64>>,
}

impl<G: Gene> EvolutionResult<G> {
    /// `false` when no genome of the final population scored above zero.
    pub fn found_feasible_improvement(&self) -> bool {
        self.value > 0
    }
}

/// Drives the generational loop for one problem and one strategy.
///
/// The launcher owns its random number generator, so a launcher built with
/// [`EvolutionLauncher::with_seed`] produces the same result for the same
/// parameters every time it is created.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<S>
where
    S: KnapsackStrategy,
{
    problem: Problem,
    strategy: S,
    options: EvolutionOptions,
    rng: RandomNumberGenerator,
}

pub type ZeroOneSolver = EvolutionLauncher<ZeroOneStrategy>;
pub type UnboundedSolver = EvolutionLauncher<UnboundedStrategy>;

impl EvolutionLauncher<ZeroOneStrategy> {
    /// A 0/1 solver: no elitism, no history unless configured.
    pub fn zero_one(problem: Problem) -> Self {
        Self::new(problem, ZeroOneStrategy)
    }
}

impl EvolutionLauncher<UnboundedStrategy> {
    /// An unbounded solver: one elite per generation and a fitness history
    /// unless configured otherwise.
    pub fn unbounded(problem: Problem) -> Self {
        Self::new(problem, UnboundedStrategy)
    }
}

impl<S> EvolutionLauncher<S>
where
    S: KnapsackStrategy,
{
    /// Creates a launcher with default options and an entropy-seeded generator.
    ///
    /// Strategies that are elitist by default start with one elite and
    /// history tracking switched on.
    pub fn new(problem: Problem, strategy: S) -> Self {
        let mut options = EvolutionOptions::default();
        if S::ELITIST_BY_DEFAULT {
            options.set_elite_count(1);
            options.set_track_history(true);
        }

        Self {
            problem,
            strategy,
            options,
            rng: RandomNumberGenerator::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = RandomNumberGenerator::from_seed(seed);
        self
    }

    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut EvolutionOptions {
        &mut self.options
    }

    /// Runs `generations` generations of `population_size` genomes with the
    /// given mutation rate. Every other setting comes from the stored options.
    ///
    /// The stored tournament size and elite count are clamped so that any
    /// positive population size can run: a tournament never draws more genomes
    /// than exist, and elites always leave room for at least one child.
    ///
    /// # Errors
    ///
    /// See [`EvolutionLauncher::evolve`].
    pub fn evolution(
        &mut self,
        generations: usize,
        population_size: usize,
        mutation_rate: f64,
    ) -> Result<EvolutionResult<S::Gene>> {
        let mut options = self.options.clone();
        options.set_num_generations(generations);
        options.set_population_size(population_size);
        options.set_mutation_rate(mutation_rate);
        if population_size > 0 {
            options.set_tournament_size(options.get_tournament_size().min(population_size));
            options.set_elite_count(options.get_elite_count().min(population_size - 1));
        }
        self.run(&options)
    }

    /// Runs the evolution with the stored options.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` before any generation runs if
    /// the options are invalid. Failures inside the loop are reported as
    /// `GeneticError::Evolution` with the generation number.
    ///
    /// A run whose final population scores zero everywhere is not an error;
    /// the result simply carries a value of 0.
    pub fn evolve(&mut self) -> Result<EvolutionResult<S::Gene>> {
        let options = self.options.clone();
        self.run(&options)
    }

    fn run(&mut self, options: &EvolutionOptions) -> Result<EvolutionResult<S::Gene>> {
        if let Err(e) = options.validate() {
            warn!(strategy = S::NAME, error = %e, "rejecting evolution options");
            return Err(e);
        }

        let parallel_threshold = options.get_parallel_threshold();

        debug!(
            strategy = S::NAME,
            items = self.problem.len(),
            capacity = self.problem.capacity(),
            generations = options.get_num_generations(),
            population_size = options.get_population_size(),
            mutation_rate = options.get_mutation_rate(),
            elite_count = options.get_elite_count(),
            "starting evolution"
        );

        let mut population = self.strategy.generate_population(
            &self.problem,
            options.get_population_size(),
            &mut self.rng,
        );
        let mut history = options
            .get_track_history()
            .then(|| Vec::with_capacity(options.get_num_generations()));

        for generation in 0..options.get_num_generations() {
            let fitness =
                population.evaluate(&KnapsackChallenge::new(&self.problem), parallel_threshold);
            let best_idx = population
                .fittest(&fitness)
                .map_err(|e| in_generation(generation, e))?;

            if let Some(history) = history.as_mut() {
                history.push(fitness[best_idx]);
            }
            log_generation(
                options.get_log_level(),
                generation,
                &population,
                &fitness,
                fitness[best_idx],
            );

            population = self
                .next_generation(&population, &fitness, options)
                .map_err(|e| in_generation(generation, e))?;
        }

        let challenge = KnapsackChallenge::new(&self.problem);
        let fitness = population.evaluate(&challenge, parallel_threshold);
        let best_idx = population.fittest(&fitness)?;
        let value = fitness[best_idx];
        let genome = population[best_idx].clone();
        let weight = challenge.evaluate(&genome).weight;

        if value == 0 {
            info!(strategy = S::NAME, "evolution finished without a feasible improvement");
        } else {
            info!(strategy = S::NAME, value, weight, "evolution finished");
        }

        Ok(EvolutionResult {
            genome,
            value,
            weight,
            history,
        })
    }

    /// Builds the population that replaces `population`.
    ///
    /// The `elite_count` fittest genomes come first, unchanged, followed by
    /// `population_size - elite_count` bred children, so every generation has
    /// exactly `population_size` genomes.
    fn next_generation(
        &mut self,
        population: &Population<S::Gene>,
        fitness: &[u64],
        options: &EvolutionOptions,
    ) -> Result<Population<S::Gene>> {
        let selection = TournamentSelection::new(options.get_tournament_size())?;

        let mut next = Vec::with_capacity(options.get_population_size());
        for idx in ElitistSelection::new().select(fitness, options.get_elite_count())? {
            next.push(population[idx].clone());
        }

        next.extend(self.strategy.breed(
            population,
            fitness,
            &selection,
            options.offspring_per_generation(),
            options.get_mutation_rate(),
            &mut self.rng,
        )?);

        Ok(Population::from_genomes(next))
    }
}

fn in_generation(generation: usize, error: GeneticError) -> GeneticError {
    GeneticError::Evolution(format!("generation {}: {}", generation, error))
}

fn log_generation<G: Gene>(
    level: &LogLevel,
    generation: usize,
    population: &Population<G>,
    fitness: &[u64],
    best: u64,
) {
    match level {
        LogLevel::None => {}
        LogLevel::Minimal | LogLevel::Verbose => {
            let scoring = fitness.iter().filter(|&&score| score > 0).count();
            info!(generation, best, scoring, "generation evaluated");

            if *level == LogLevel::Verbose {
                for (genome, score) in population.iter().zip(fitness) {
                    debug!(generation, genes = ?genome.genes(), fitness = score, "genome");
                }
            }
        }
    }
}
