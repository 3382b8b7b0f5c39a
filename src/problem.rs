//! # Problem
//!
//! A knapsack instance: an ordered list of items and a capacity. The position
//! of an item in the list is the position of its gene in every genome, so a
//! `Problem` is immutable once built.
//!
//! ```rust
//! use knapsack_ga::problem::{Item, Problem};
//!
//! let problem = Problem::new(vec![Item::new(2, 3), Item::new(3, 4)], 5).unwrap();
//! assert_eq!(problem.len(), 2);
//! assert_eq!(problem.max_copies(0), 2);
//! ```

use crate::error::{GeneticError, Result};

/// One item: how much capacity a copy uses and what a copy is worth.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub weight: u64,
    pub value: u64,
}

impl Item {
    pub fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }
}

impl From<(u64, u64)> for Item {
    fn from((weight, value): (u64, u64)) -> Self {
        Self { weight, value }
    }
}

/// A validated knapsack instance.
///
/// Deserialization goes through [`Problem::new`], so a deserialized problem
/// obeys the same rules as a constructed one.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawProblem")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    items: Vec<Item>,
    capacity: u64,
}

/// Unvalidated wire form of a [`Problem`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawProblem {
    items: Vec<Item>,
    capacity: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProblem> for Problem {
    type Error = GeneticError;

    fn try_from(raw: RawProblem) -> Result<Self> {
        Problem::new(raw.items, raw.capacity)
    }
}

impl Problem {
    /// Creates a problem from its items and capacity.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidProblem` if the capacity is zero, the item
    /// list is empty, or any item has zero weight. Zero-weight items would make
    /// the unbounded copy limit `capacity / weight` undefined.
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self> {
        if capacity == 0 {
            return Err(GeneticError::InvalidProblem(
                "Capacity must be a positive integer".to_string(),
            ));
        }

        if items.is_empty() {
            return Err(GeneticError::InvalidProblem(
                "A problem needs at least one item".to_string(),
            ));
        }

        if let Some(idx) = items.iter().position(|item| item.weight == 0) {
            return Err(GeneticError::InvalidProblem(format!(
                "Item {} has zero weight",
                idx
            )));
        }

        Ok(Self { items, capacity })
    }

    /// Creates a problem from `(weight, value)` pairs.
    pub fn from_pairs(pairs: &[(u64, u64)], capacity: u64) -> Result<Self> {
        Self::new(pairs.iter().copied().map(Item::from).collect(), capacity)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items, which is also the genome length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a constructed problem; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many copies of item `index` fit on their own: `capacity / weight`.
    ///
    /// Returns 0 for an out-of-range index.
    pub fn max_copies(&self, index: usize) -> u64 {
        self.items
            .get(index)
            .map(|item| self.capacity / item.weight)
            .unwrap_or(0)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_rejects_zero_weight() {
        let json = r#"{"items":[{"weight":0,"value":3}],"capacity":5}"#;
        let err = serde_json::from_str::<Problem>(json).unwrap_err();
        assert!(err.to_string().contains("zero weight"));
    }

    #[test]
    fn test_deserialize_rejects_empty_problem() {
        let json = r#"{"items":[],"capacity":0}"#;
        assert!(serde_json::from_str::<Problem>(json).is_err());
    }

    #[test]
    fn test_deserialize_valid_problem() {
        let problem = Problem::from_pairs(&[(2, 3), (3, 4)], 5).unwrap();
        let json = serde_json::to_string(&problem).unwrap();
        let restored: Problem = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, problem);
        assert_eq!(restored.max_copies(1), 1);
    }
}
