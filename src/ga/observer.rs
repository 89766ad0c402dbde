//! Progress reporting hooks.
//!
//! The engine never prints. It calls an [`EvolutionObserver`] instead, and
//! the caller decides what to do with the events: ignore them
//! ([`NoopObserver`]), forward them to `tracing` ([`TracingReporter`]), or
//! record them.

use super::types::Fitness;

/// Summary of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,

    /// Best fitness in this generation's population.
    pub best_fitness: Fitness,

    /// Mean fitness of this generation's population.
    pub mean_fitness: f64,

    /// Best fitness seen over the whole run, after this generation.
    pub solution_fitness: Fitness,
}

impl GenerationStats {
    pub(crate) fn from_fitnesses(
        generation: usize,
        fitnesses: &[Fitness],
        solution_fitness: Fitness,
    ) -> Self {
        let best_fitness = fitnesses.iter().copied().max().unwrap_or(0);
        let mean_fitness = if fitnesses.is_empty() {
            0.0
        } else {
            fitnesses.iter().map(|&f| f as f64).sum::<f64>() / fitnesses.len() as f64
        };
        Self {
            generation,
            best_fitness,
            mean_fitness,
            solution_fitness,
        }
    }
}

/// Receives engine events. Every hook defaults to a no-op.
pub trait EvolutionObserver {
    /// Called at the start of each generation with its index and the
    /// configured total.
    fn on_progress(&mut self, _generation: usize, _total: usize) {}

    /// Called exactly when the best-known solution is replaced.
    fn on_improvement(&mut self, _fitness: Fitness, _generation: usize) {}

    /// Called once the generation has been evaluated.
    fn on_generation(&mut self, _stats: &GenerationStats) {}
}

/// Ignores all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl EvolutionObserver for NoopObserver {}

/// Forwards events to `tracing`.
///
/// Progress goes out at `TRACE`, per-generation statistics at `DEBUG`, and
/// improvements at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl EvolutionObserver for TracingReporter {
    fn on_progress(&mut self, generation: usize, total: usize) {
        tracing::trace!(generation, total, "generation started");
    }

    fn on_improvement(&mut self, fitness: Fitness, generation: usize) {
        tracing::info!(fitness, generation, "new solution found");
    }

    fn on_generation(&mut self, stats: &GenerationStats) {
        tracing::debug!(
            generation = stats.generation,
            best = stats.best_fitness,
            mean = stats.mean_fitness,
            solution = stats.solution_fitness,
            "generation evaluated"
        );
    }
}
