//! # UnboundedStrategy
//!
//! Any number of copies of an item may be packed. Initial counts for item `i`
//! are drawn from `[0, capacity / weight_i]`, the most copies of that item that
//! fit on their own. A mutation moves a count up or down by one and never
//! below zero; counts above the capacity are left for the fitness function to
//! punish.
use super::KnapsackStrategy;
use crate::{problem::Problem, rng::RandomNumberGenerator};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnboundedStrategy;

impl UnboundedStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl KnapsackStrategy for UnboundedStrategy {
    type Gene = u64;

    const NAME: &'static str = "unbounded";
    const ELITIST_BY_DEFAULT: bool = true;

    fn random_gene(
        &self,
        problem: &Problem,
        index: usize,
        rng: &mut RandomNumberGenerator,
    ) -> u64 {
        rng.gen_range_inclusive(0, problem.max_copies(index))
    }

    fn mutate_gene(&self, gene: u64, rng: &mut RandomNumberGenerator) -> u64 {
        if rng.coin_flip() {
            gene.saturating_add(1)
        } else {
            gene.saturating_sub(1)
        }
    }
}
