use crate::error::{GeneticError, Result};

/// A selection strategy that picks the fittest genomes of a generation.
///
/// The launcher uses it to carry elites unchanged into the next generation.
/// Ordering is stable: among equally fit genomes the one earlier in the
/// population comes first.
///
/// # Examples
///
/// ```
/// use knapsack_ga::selection::ElitistSelection;
///
/// let fitness = vec![5, 8, 3, 8];
/// let selected = ElitistSelection::new().select(&fitness, 2).unwrap();
/// assert_eq!(selected, vec![1, 3]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }

    /// Indices of the `count` fittest genomes, best first.
    ///
    /// Returns fewer indices if the population is smaller than `count`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` when asked for elites of an
    /// empty population.
    pub fn select(&self, fitness: &[u64], count: usize) -> Result<Vec<usize>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        if fitness.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut indices: Vec<usize> = (0..fitness.len()).collect();
        // `sort_by` is stable, which keeps population order among ties.
        indices.sort_by(|&a, &b| fitness[b].cmp(&fitness[a]));
        indices.truncate(count);

        Ok(indices)
    }
}
