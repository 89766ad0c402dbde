//! The knapsack instance: item set, capacity and fitness evaluation.

use super::operators;
use super::types::{Chromosome, Fitness, Item, Solution};
use crate::error::ConfigError;
use rand::Rng;

/// Largest instance [`Knapsack::exhaustive_optimum`] will enumerate.
pub const MAX_EXHAUSTIVE_ITEMS: usize = 24;

/// A 0/1 knapsack instance.
///
/// The item order is fixed and defines the chromosome layout: gene `i`
/// refers to `items()[i]`.
///
/// # Examples
///
/// ```
/// use u_knapsack::ga::{Item, Knapsack};
///
/// let knapsack = Knapsack::new(vec![Item::new(2, 3), Item::new(3, 4)], 4).unwrap();
/// assert_eq!(knapsack.evaluate(&"10".parse().unwrap()), 3);
/// assert_eq!(knapsack.evaluate(&"11".parse().unwrap()), 0); // too heavy
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: u64,
}

impl Knapsack {
    /// Creates an instance.
    ///
    /// Fails if `items` is empty or if the value of all items together does
    /// not fit in a [`Fitness`].
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.value))
            .ok_or(ConfigError::ValueOverflow)?;
        Ok(Self { items, capacity })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Chromosome length for this instance.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Creates a random chromosome of the right length.
    pub fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome {
        operators::random_chromosome(self.items.len(), rng)
    }

    /// Scores a chromosome.
    ///
    /// Walks the items in order, summing weight and value of the included
    /// ones. As soon as the weight exceeds the capacity the chromosome is
    /// infeasible and scores 0, same as the empty knapsack.
    ///
    /// # Panics
    /// Panics if the chromosome length differs from the item count.
    pub fn evaluate(&self, chromosome: &Chromosome) -> Fitness {
        self.check_len(chromosome);

        let mut weight = 0u64;
        let mut value = 0u64;
        for (item, included) in self.items.iter().zip(chromosome.iter()) {
            if !included {
                continue;
            }
            weight = match weight.checked_add(item.weight) {
                Some(w) if w <= self.capacity => w,
                _ => return 0,
            };
            // Cannot overflow: total value was checked in `new`.
            value += item.value;
        }
        value
    }

    /// Total weight of the included items, saturating at `u64::MAX`.
    pub fn weight_of(&self, chromosome: &Chromosome) -> u64 {
        self.check_len(chromosome);
        self.items
            .iter()
            .zip(chromosome.iter())
            .filter(|(_, included)| *included)
            .fold(0u64, |acc, (item, _)| acc.saturating_add(item.weight))
    }

    pub fn is_feasible(&self, chromosome: &Chromosome) -> bool {
        self.check_len(chromosome);
        self.items
            .iter()
            .zip(chromosome.iter())
            .filter(|(_, included)| *included)
            .try_fold(0u64, |acc, (item, _)| acc.checked_add(item.weight))
            .is_some_and(|weight| weight <= self.capacity)
    }

    /// Finds the true optimum by enumerating every subset.
    ///
    /// Returns `None` for instances larger than [`MAX_EXHAUSTIVE_ITEMS`].
    /// Ties keep the subset with the lowest bit mask (bit `i` = item `i`).
    pub fn exhaustive_optimum(&self) -> Option<Solution> {
        let n = self.items.len();
        if n > MAX_EXHAUSTIVE_ITEMS {
            return None;
        }

        let mut best_mask = 0u32;
        let mut best_value = 0u64;
        for mask in 1u32..(1u32 << n) {
            let mut weight = Some(0u64);
            let mut value = 0u64;
            for (i, item) in self.items.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    weight = weight.and_then(|w| w.checked_add(item.weight));
                    value += item.value;
                }
            }
            let fits = weight.is_some_and(|w| w <= self.capacity);
            if fits && value > best_value {
                best_value = value;
                best_mask = mask;
            }
        }

        let genes = (0..n).map(|i| best_mask & (1 << i) != 0).collect::<Vec<_>>();
        Some(Solution {
            chromosome: Chromosome::new(genes),
            fitness: best_value,
        })
    }

    fn check_len(&self, chromosome: &Chromosome) {
        assert_eq!(
            chromosome.len(),
            self.items.len(),
            "chromosome length must equal item count"
        );
    }
}
