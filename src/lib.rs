//! Genetic-algorithm solver for the 0/1 knapsack problem.
//!
//! Evolves a population of candidate item subsets over a fixed number of
//! generations and keeps the best feasible subset ever seen:
//!
//! - **Encoding**: one boolean gene per item.
//! - **Fitness**: total value, or 0 as soon as the capacity is exceeded.
//! - **Selection**: fitness-proportional roulette wheel.
//! - **Crossover**: single cut point, one child per pair of parents.
//! - **Mutation**: independent per-gene flips.
//! - **Elitism**: the best-known chromosome seeds every new generation.
//!
//! All randomness comes from one seeded generator, so a run is reproducible
//! from its seed. The engine does no I/O; progress is reported through
//! [`ga::EvolutionObserver`].
//!
//! # Example
//!
//! ```
//! use u_knapsack::ga::{EvolutionEngine, GaConfig};
//! use u_knapsack::dataset;
//!
//! let config = GaConfig::default()
//!     .with_population_size(50)
//!     .with_iterations(20)
//!     .with_seed(1);
//! let mut engine = EvolutionEngine::new(dataset::benchmark(), config).unwrap();
//! let solution = engine.solve();
//! assert!(solution.fitness <= dataset::BENCHMARK_OPTIMUM);
//! ```

pub mod dataset;
mod error;
pub mod ga;
pub mod random;

pub use error::{ConfigError, ParseChromosomeError};
