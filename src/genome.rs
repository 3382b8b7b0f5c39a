//! # Genome
//!
//! A genome is one candidate solution: gene `i` says how many copies of item
//! `i` are packed. The 0/1 solver uses `bool` genes, the unbounded solver
//! uses `u64` copy counts. Both go through the [`Gene`] trait so fitness and
//! crossover are written once.
//!
//! ```rust
//! use knapsack_ga::genome::Genome;
//!
//! let genome = Genome::new(vec![true, false, true]);
//! assert_eq!(genome.counts(), vec![1, 0, 1]);
//! ```

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A single gene of a knapsack genome.
///
/// Types implementing this trait must also implement `Copy`, `Debug`, `Send`
/// and `Sync` so populations can be evaluated in parallel.
pub trait Gene: Copy + Debug + PartialEq + Send + Sync {
    /// Number of copies of the corresponding item this gene selects.
    fn copies(&self) -> u64;
}

impl Gene for bool {
    fn copies(&self) -> u64 {
        u64::from(*self)
    }
}

impl Gene for u64 {
    fn copies(&self) -> u64 {
        *self
    }
}

/// An ordered sequence of genes, one per item of the problem.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genome<G> {
    genes: Vec<G>,
}

impl<G: Gene> Genome<G> {
    pub fn new(genes: Vec<G>) -> Self {
        Self { genes }
    }

    pub fn genes(&self) -> &[G] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [G] {
        &mut self.genes
    }

    pub fn into_genes(self) -> Vec<G> {
        self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Copy counts per item, regardless of the gene type.
    pub fn counts(&self) -> Vec<u64> {
        self.genes.iter().map(Gene::copies).collect()
    }

    /// Single-point crossover.
    ///
    /// The cut is drawn uniformly from `[1, len - 1]` and the child is
    /// `self[..cut]` followed by `other[cut..]`, so both parents always
    /// contribute. A genome of length 1 has no interior cut and the child is a
    /// copy of `self`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Breeding` if the parents differ in length.
    pub fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Result<Self> {
        if self.len() != other.len() {
            return Err(GeneticError::Breeding(format!(
                "Parent lengths differ ({} vs {})",
                self.len(),
                other.len()
            )));
        }

        if self.len() < 2 {
            return Ok(self.clone());
        }

        let cut = rng.gen_index(1, self.len());
        Ok(self.splice_at(other, cut))
    }

    /// Child made of `self[..cut]` and `other[cut..]`.
    pub(crate) fn splice_at(&self, other: &Self, cut: usize) -> Self {
        let mut genes = Vec::with_capacity(self.len());
        genes.extend_from_slice(&self.genes[..cut]);
        genes.extend_from_slice(&other.genes[cut..]);
        Self { genes }
    }
}

impl<G: Gene> From<Vec<G>> for Genome<G> {
    fn from(genes: Vec<G>) -> Self {
        Self::new(genes)
    }
}
