//! # ZeroOneStrategy
//!
//! Every item is either packed once or left out. Initial genes are fair coin
//! flips and a mutation flips the bit.
use super::KnapsackStrategy;
use crate::{problem::Problem, rng::RandomNumberGenerator};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroOneStrategy;

impl ZeroOneStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl KnapsackStrategy for ZeroOneStrategy {
    type Gene = bool;

    const NAME: &'static str = "0/1";
    const ELITIST_BY_DEFAULT: bool = false;

    fn random_gene(
        &self,
        _problem: &Problem,
        _index: usize,
        rng: &mut RandomNumberGenerator,
    ) -> bool {
        rng.coin_flip()
    }

    fn mutate_gene(&self, gene: bool, _rng: &mut RandomNumberGenerator) -> bool {
        !gene
    }
}
