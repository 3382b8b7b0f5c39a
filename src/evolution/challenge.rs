//! # Challenge
//!
//! A challenge scores genomes. [`KnapsackChallenge`] is the fitness function
//! for both solver variants: the total value of the selection, or zero when
//! the selection is heavier than the capacity. There is no partial credit, so
//! an overweight genome scores the same as an empty one.

use crate::{
    error::{GeneticError, Result},
    genome::{Gene, Genome},
    problem::Problem,
};

pub trait Challenge<G: Gene>: Send + Sync {
    fn score(&self, genome: &Genome<G>) -> u64;
}

/// Total weight and value of a genome, before the capacity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub weight: u64,
    pub value: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct KnapsackChallenge<'a> {
    problem: &'a Problem,
}

impl<'a> KnapsackChallenge<'a> {
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Sums weight and value over the genome.
    ///
    /// Arithmetic saturates, so an overflowing weight is still over capacity.
    /// Genes beyond the item count are ignored.
    pub fn evaluate<G: Gene>(&self, genome: &Genome<G>) -> Evaluation {
        genome
            .genes()
            .iter()
            .zip(self.problem.items())
            .fold(Evaluation::default(), |acc, (gene, item)| {
                let copies = gene.copies();
                Evaluation {
                    weight: acc.weight.saturating_add(copies.saturating_mul(item.weight)),
                    value: acc.value.saturating_add(copies.saturating_mul(item.value)),
                }
            })
    }

    pub fn is_feasible<G: Gene>(&self, genome: &Genome<G>) -> bool {
        self.evaluate(genome).weight <= self.problem.capacity()
    }

    /// Like [`Challenge::score`], but rejects genomes that do not match the
    /// problem's item count.
    pub fn try_score<G: Gene>(&self, genome: &Genome<G>) -> Result<u64> {
        if genome.len() != self.problem.len() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Genome has {} genes but the problem has {} items",
                genome.len(),
                self.problem.len()
            )));
        }
        Ok(self.score(genome))
    }
}

impl<G: Gene> Challenge<G> for KnapsackChallenge<'_> {
    fn score(&self, genome: &Genome<G>) -> u64 {
        let evaluation = self.evaluate(genome);
        if evaluation.weight > self.problem.capacity() {
            0
        } else {
            evaluation.value
        }
    }
}
