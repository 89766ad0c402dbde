//! Runs the GA on the 24-item benchmark instance.
//!
//! Usage: `knapsack [SEED]`. Without a seed one is drawn from system
//! entropy and logged so the run can be repeated.

use tracing::Level;
use u_knapsack::dataset::{self, BENCHMARK_OPTIMAL_CHROMOSOME, BENCHMARK_OPTIMUM};
use u_knapsack::ga::{EvolutionEngine, GaConfig, TracingReporter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut config = GaConfig::benchmark();
    if let Some(seed) = std::env::args().nth(1) {
        config = config.with_seed(seed.parse()?);
    }

    let mut engine = EvolutionEngine::new(dataset::benchmark(), config)?;
    tracing::info!(seed = engine.seed(), "starting benchmark run");

    let solution = engine.solve_with(&mut TracingReporter).clone();
    let weight = engine.problem().weight_of(&solution.chromosome);

    tracing::info!(
        fitness = solution.fitness,
        weight,
        chromosome = %solution.chromosome,
        "current solution"
    );
    tracing::info!(
        fitness = BENCHMARK_OPTIMUM,
        chromosome = BENCHMARK_OPTIMAL_CHROMOSOME,
        "global solution"
    );
    Ok(())
}
