//! Error types.

/// A construction-time contract violation.
///
/// Returned by [`Knapsack::new`](crate::ga::Knapsack::new),
/// [`GaConfig::validate`](crate::ga::GaConfig::validate) and
/// [`EvolutionEngine::new`](crate::ga::EvolutionEngine::new). None of these
/// are recoverable by retrying; they indicate a caller bug.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("item list must not be empty")]
    NoItems,
    #[error("total item value does not fit in u64")]
    ValueOverflow,
    #[error("population_size must be at least 1")]
    EmptyPopulation,
    #[error("mutation_rate must be between 0.0 and 1.0, got: {0}")]
    MutationRateOutOfRange(f64),
}

/// Failure to parse a chromosome from a `0`/`1` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid gene {found:?} at position {position}, expected '0' or '1'")]
pub struct ParseChromosomeError {
    pub position: usize,
    pub found: char,
}
