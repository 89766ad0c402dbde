//! Genetic operators for boolean chromosomes.
//!
//! # Operators
//!
//! - [`random_chromosome`]: fair-coin initialization
//! - [`crossover`] / [`crossover_at`]: single-point crossover producing one child
//! - [`mutate`]: independent per-gene bit flip
//!
//! All randomness comes from the caller's generator, so the draw order is
//! fixed by the order of calls.

use super::types::Chromosome;
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Creates a chromosome of `len` genes, each true with probability 0.5.
pub fn random_chromosome<R: Rng>(len: usize, rng: &mut R) -> Chromosome {
    (0..len)
        .map(|_| rng.random_bool(0.5))
        .collect::<Vec<_>>()
        .into()
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Draws a cut point uniformly from `0..=len` and returns
/// `parent1[..cut] ++ parent2[cut..]`. A cut of 0 copies `parent2`, a cut
/// of `len` copies `parent1`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn crossover<R: Rng>(parent1: &Chromosome, parent2: &Chromosome, rng: &mut R) -> Chromosome {
    let cut = rng.random_range(0..=parent1.len());
    crossover_at(parent1, parent2, cut)
}

/// Splices two parents at a fixed cut point.
///
/// # Panics
/// Panics if the parents have different lengths or `cut > len`.
pub fn crossover_at(parent1: &Chromosome, parent2: &Chromosome, cut: usize) -> Chromosome {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(cut <= n, "cut point {cut} beyond chromosome length {n}");

    let mut genes = Vec::with_capacity(n);
    genes.extend_from_slice(&parent1.genes()[..cut]);
    genes.extend_from_slice(&parent2.genes()[cut..]);
    Chromosome::new(genes)
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips each gene independently with probability `rate`.
///
/// One uniform draw in `[0, 1)` is consumed per gene, whatever the rate.
pub fn mutate<R: Rng>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) {
    for gene in chromosome.genes_mut() {
        if rng.random::<f64>() < rate {
            *gene = !*gene;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
