//! Fitness-proportional (roulette wheel) parent selection.
//!
//! The wheel draws one integer uniformly from `0..=fitness_sum` and scans the
//! cumulative fitness of every individual except the last, returning the
//! first whose running sum is strictly greater than the draw. When the scan
//! finds nothing the last individual is returned.
//!
//! Two consequences follow and are relied upon:
//!
//! - The draw may equal `fitness_sum`, which no prefix of the scanned range
//!   can exceed, so the last individual is always reachable even with
//!   fitness 0.
//! - If every fitness is 0 the draw is always 0, no running sum exceeds it,
//!   and selection returns the last individual every time.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use super::types::{Chromosome, Fitness};
use rand::Rng;

/// Spins the wheel and returns the selected index.
///
/// `fitness_sum` must be the sum of `fitnesses`; it is passed in so one sum
/// serves every draw of a generation.
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn roulette_index<R: Rng>(fitnesses: &[Fitness], fitness_sum: u128, rng: &mut R) -> usize {
    assert!(
        !fitnesses.is_empty(),
        "cannot select from empty population"
    );

    let last = fitnesses.len() - 1;
    let pick = rng.random_range(0..=fitness_sum);
    let mut cumulative = 0u128;
    for (i, &fitness) in fitnesses[..last].iter().enumerate() {
        cumulative += u128::from(fitness);
        if pick < cumulative {
            return i;
        }
    }

    last
}

/// Selects a parent chromosome by roulette wheel.
///
/// # Panics
/// Panics if `population` is empty or its length differs from `fitnesses`.
pub fn select<'a, R: Rng>(
    population: &'a [Chromosome],
    fitnesses: &[Fitness],
    fitness_sum: u128,
    rng: &mut R,
) -> &'a Chromosome {
    assert_eq!(
        population.len(),
        fitnesses.len(),
        "one fitness per chromosome required"
    );
    &population[roulette_index(fitnesses, fitness_sum, rng)]
}

/// Sums fitnesses without overflow.
pub fn fitness_sum(fitnesses: &[Fitness]) -> u128 {
    fitnesses.iter().map(|&f| u128::from(f)).sum()
}
