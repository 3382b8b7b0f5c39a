//! # KnapsackStrategy
//!
//! The `KnapsackStrategy` trait is the capability set the evolution driver is
//! generic over. A strategy decides how genes are drawn for the initial
//! population and how a single gene mutates; population generation, single
//! point crossover, whole-genome mutation and breeding are shared.
//!
//! Two strategies ship with the crate:
//!
//! - [`ZeroOneStrategy`]: `bool` genes, each item packed at most once.
//! - [`UnboundedStrategy`]: `u64` genes, any number of copies per item.
pub mod unbounded;
pub mod zero_one;

use std::fmt::Debug;

use crate::{
    error::Result,
    genome::{Gene, Genome},
    population::Population,
    problem::Problem,
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
};

pub trait KnapsackStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    type Gene: Gene;

    /// Short name used in log lines.
    const NAME: &'static str;

    /// Whether a launcher built with this strategy carries elites and keeps
    /// a fitness history unless told otherwise.
    const ELITIST_BY_DEFAULT: bool;

    /// Draws the initial value of gene `index`.
    fn random_gene(
        &self,
        problem: &Problem,
        index: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Self::Gene;

    /// Applies one mutation step to a gene that was picked for mutation.
    fn mutate_gene(&self, gene: Self::Gene, rng: &mut RandomNumberGenerator) -> Self::Gene;

    /// A fresh genome with one randomly drawn gene per item.
    fn random_genome(
        &self,
        problem: &Problem,
        rng: &mut RandomNumberGenerator,
    ) -> Genome<Self::Gene> {
        Genome::new(
            (0..problem.len())
                .map(|index| self.random_gene(problem, index, rng))
                .collect(),
        )
    }

    fn generate_population(
        &self,
        problem: &Problem,
        size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Population<Self::Gene> {
        Population::generate(self, problem, size, rng)
    }

    fn crossover(
        &self,
        parent1: &Genome<Self::Gene>,
        parent2: &Genome<Self::Gene>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Genome<Self::Gene>> {
        parent1.crossover(parent2, rng)
    }

    /// Mutates every gene independently with probability `mutation_rate`.
    fn mutate(
        &self,
        genome: &mut Genome<Self::Gene>,
        mutation_rate: f64,
        rng: &mut RandomNumberGenerator,
    ) {
        for gene in genome.genes_mut() {
            if rng.chance(mutation_rate) {
                *gene = self.mutate_gene(*gene, rng);
            }
        }
    }

    /// Breeds `count` children from `population`.
    ///
    /// Each child takes two tournament winners, crosses them over and then
    /// mutates the result.
    ///
    /// ## Errors
    ///
    /// Fails if a tournament cannot be held (empty population, tournament
    /// larger than the population) or the parents have different lengths.
    fn breed(
        &self,
        population: &Population<Self::Gene>,
        fitness: &[u64],
        selection: &TournamentSelection,
        count: usize,
        mutation_rate: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome<Self::Gene>>> {
        let mut children = Vec::with_capacity(count);
        for _ in 0..count {
            let parent1 = &population[selection.select(fitness, rng)?];
            let parent2 = &population[selection.select(fitness, rng)?];

            let mut child = self.crossover(parent1, parent2, rng)?;
            self.mutate(&mut child, mutation_rate, rng);
            children.push(child);
        }
        Ok(children)
    }
}

pub use unbounded::UnboundedStrategy;
pub use zero_one::ZeroOneStrategy;
