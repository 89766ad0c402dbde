//! GA configuration.
//!
//! [`GaConfig`] holds the parameters that control the evolutionary loop.
//! The instance itself (items and capacity) lives in
//! [`Knapsack`](super::Knapsack).

use crate::error::ConfigError;

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.iterations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_iterations(50)
///     .with_mutation_rate(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in every generation.
    pub population_size: usize,

    /// Number of generations to run. Zero is allowed and leaves the
    /// solution at its initial empty state.
    pub iterations: usize,

    /// Per-gene flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws one from system entropy when the engine is built; read
    /// it back with [`EvolutionEngine::seed`](super::EvolutionEngine::seed).
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            iterations: 500,
            mutation_rate: 0.01,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the mutation rate.
    ///
    /// Not clamped: out-of-range values are reported by
    /// [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parameters of the 24-item benchmark run.
    ///
    /// - Population: 1000, Generations: 1000, Mutation rate: 0.001
    pub fn benchmark() -> Self {
        Self {
            population_size: 1000,
            iterations: 1000,
            mutation_rate: 0.001,
            seed: None,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        Ok(())
    }
}
