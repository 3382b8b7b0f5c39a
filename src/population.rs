//! # Population
//!
//! The set of genomes alive in one generation. A population is generated
//! once at the start of a run, replaced wholesale every generation and
//! dropped when the run ends. Iteration order is the insertion order, which
//! makes tie-breaking by "first encountered" deterministic.
//!
//! ## Parallel evaluation
//!
//! Scoring genomes has no data dependencies, so [`Population::evaluate`]
//! scores large populations with rayon. The RNG is never touched while
//! evaluating, so both paths give identical fitness vectors.

use std::ops::Index;

use rayon::prelude::*;

use crate::{
    error::{GeneticError, OptionExt, Result},
    evolution::Challenge,
    genome::{Gene, Genome},
    problem::Problem,
    rng::RandomNumberGenerator,
    strategy::KnapsackStrategy,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population<G: Gene> {
    members: Vec<Genome<G>>,
}

impl<G: Gene> Population<G> {
    /// Generates `size` random genomes for `problem` using the strategy's gene draws.
    pub fn generate<S>(
        strategy: &S,
        problem: &Problem,
        size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Self
    where
        S: KnapsackStrategy<Gene = G>,
    {
        Self {
            members: (0..size)
                .map(|_| strategy.random_genome(problem, rng))
                .collect(),
        }
    }

    pub fn from_genomes(members: Vec<Genome<G>>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Genome<G>> {
        self.members.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Genome<G>> {
        self.members.get(index)
    }

    pub fn into_genomes(self) -> Vec<Genome<G>> {
        self.members
    }

    /// Scores every genome, in population order.
    ///
    /// Populations of at least `parallel_threshold` genomes are scored with
    /// rayon; smaller ones sequentially.
    pub fn evaluate<C>(&self, challenge: &C, parallel_threshold: usize) -> Vec<u64>
    where
        C: Challenge<G>,
    {
        if self.members.len() >= parallel_threshold {
            self.members
                .par_iter()
                .map(|genome| challenge.score(genome))
                .collect()
        } else {
            self.members
                .iter()
                .map(|genome| challenge.score(genome))
                .collect()
        }
    }

    /// Index of the fittest genome; the first one wins ties.
    ///
    /// ## Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` for an empty population and
    /// `GeneticError::Configuration` if `fitness` does not line up with the
    /// population.
    pub fn fittest(&self, fitness: &[u64]) -> Result<usize> {
        if self.members.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if fitness.len() != self.members.len() {
            return Err(GeneticError::Configuration(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                self.members.len()
            )));
        }

        fitness
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, u64)>, (idx, &score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((idx, score)),
            })
            .map(|(idx, _)| idx)
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }
}

impl<G: Gene> Index<usize> for Population<G> {
    type Output = Genome<G>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.members[index]
    }
}

impl<G: Gene> FromIterator<Genome<G>> for Population<G> {
    fn from_iter<I: IntoIterator<Item = Genome<G>>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a, G: Gene> IntoIterator for &'a Population<G> {
    type Item = &'a Genome<G>;
    type IntoIter = std::slice::Iter<'a, Genome<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
