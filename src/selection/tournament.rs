use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A selection strategy that picks parents through tournament selection.
///
/// A tournament draws `tournament_size` distinct genomes uniformly at random
/// and returns the fittest of them. Ties go to the genome drawn first.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// # Examples
///
/// ```
/// use knapsack_ga::selection::TournamentSelection;
/// use knapsack_ga::rng::RandomNumberGenerator;
///
/// let fitness = vec![5, 8, 3, 9, 1];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// // A tournament over the whole population always finds the best.
/// let selection = TournamentSelection::new(5).unwrap();
/// assert_eq!(selection.select(&fitness, &mut rng).unwrap(), 3);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament over `fitness` and returns the index of the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or smaller than the tournament.
    pub fn select(&self, fitness: &[u64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if fitness.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if self.tournament_size > fitness.len() {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size,
                fitness.len()
            )));
        }

        let participants = rng.sample_distinct(fitness.len(), self.tournament_size);

        let mut best_idx = participants[0];
        let mut best_fitness = fitness[best_idx];

        for &idx in &participants[1..] {
            if fitness[idx] > best_fitness {
                best_idx = idx;
                best_fitness = fitness[idx];
            }
        }

        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 2 }
    }
}
