//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! Candidate subsets are encoded as fixed-length boolean [`Chromosome`]s
//! (gene `i` = item `i` is packed) and scored by [`Knapsack::evaluate`]:
//! the total value when the weight fits, 0 otherwise.
//!
//! # Key Types
//!
//! - [`Knapsack`]: The instance (items, capacity) and its fitness function
//! - [`GaConfig`]: Algorithm parameters (population size, iterations, mutation rate, seed)
//! - [`EvolutionEngine`]: Executes the evolutionary loop and keeps the best [`Solution`]
//! - [`EvolutionObserver`]: Progress and improvement hooks for reporting
//!
//! # Submodules
//!
//! - [`operators`]: Random initialization, single-point crossover, bit-flip mutation
//! - [`selection`]: Roulette wheel parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer Implementations*

mod config;
mod observer;
pub mod operators;
mod problem;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use observer::{EvolutionObserver, GenerationStats, NoopObserver, TracingReporter};
pub use problem::{Knapsack, MAX_EXHAUSTIVE_ITEMS};
pub use runner::EvolutionEngine;
pub use types::{Chromosome, Fitness, Item, Solution};
