//! Core data model: items, chromosomes and solutions.
//!
//! A [`Chromosome`] is a fixed-length boolean vector whose gene `i` decides
//! whether item `i` goes into the knapsack. Fitness is never stored on the
//! chromosome; it is recomputed from the [`Knapsack`](super::Knapsack)
//! every generation.

use crate::error::ParseChromosomeError;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Fitness of a chromosome: total value when feasible, 0 otherwise.
pub type Fitness = u64;

/// A knapsack item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: u64,
    pub value: u64,
}

impl Item {
    pub const fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }
}

/// Encoding of one candidate item subset.
///
/// # Examples
///
/// ```
/// use u_knapsack::ga::Chromosome;
///
/// let c: Chromosome = "0110".parse().unwrap();
/// assert_eq!(c.len(), 4);
/// assert!(c[1] && c[2]);
/// assert_eq!(c.selected().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(c.to_string(), "0110");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// The all-false chromosome (empty knapsack) of the given length.
    pub fn empty(len: usize) -> Self {
        Self {
            genes: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.genes.iter().copied()
    }

    /// Flips gene `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Indices of the included items, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &gene)| gene.then_some(i))
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

impl Index<usize> for Chromosome {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.genes[index]
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genes {
            f.write_str(if gene { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Chromosome {
    type Err = ParseChromosomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(ParseChromosomeError { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

/// The best chromosome observed so far and its fitness.
///
/// Owned and updated by [`EvolutionEngine`](super::EvolutionEngine); its
/// fitness never decreases over a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub chromosome: Chromosome,
    pub fitness: Fitness,
}

impl Solution {
    /// The initial record: empty knapsack, fitness 0.
    pub fn empty(len: usize) -> Self {
        Self {
            chromosome: Chromosome::empty(len),
            fitness: 0,
        }
    }
}
