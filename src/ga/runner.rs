//! GA evolutionary loop execution.
//!
//! [`EvolutionEngine`] owns the population, the generator and the
//! best-known [`Solution`], and drives one cycle per generation:
//! evaluation → elitism → selection + crossover → mutation → replace.

use super::config::GaConfig;
use super::observer::{EvolutionObserver, GenerationStats, NoopObserver};
use super::operators::{crossover, mutate};
use super::problem::Knapsack;
use super::selection::{fitness_sum, select};
use super::types::{Chromosome, Fitness, Solution};
use crate::error::ConfigError;
use crate::random::{create_rng, entropy_seed, Rng};

/// Runs the knapsack GA.
///
/// Generation 0 is built when the engine is constructed. Each call to
/// [`step`](Self::step) then evaluates the current population, records any
/// improvement, and breeds its replacement:
///
/// 1. The next population starts with a copy of the best-known chromosome.
/// 2. It is filled up by crossing two roulette-selected parents per child
///    (drawn with replacement, so both may be the same chromosome).
/// 3. Every member, the elite copy included, is mutated.
///
/// Only the separately held [`Solution`] is immune to mutation, so the
/// best-known chromosome need not be present in the live population.
///
/// # Usage
///
/// ```
/// use u_knapsack::ga::{EvolutionEngine, GaConfig, Item, Knapsack};
///
/// let knapsack = Knapsack::new(
///     vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)],
///     5,
/// ).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_iterations(50)
///     .with_seed(42);
///
/// let mut engine = EvolutionEngine::new(knapsack, config).unwrap();
/// let solution = engine.solve();
/// assert_eq!(solution.fitness, 7);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionEngine {
    problem: Knapsack,
    config: GaConfig,
    seed: u64,
    rng: Rng,
    population: Vec<Chromosome>,
    solution: Solution,
    generation: usize,
    fitness_history: Vec<Fitness>,
}

impl EvolutionEngine {
    /// Validates the configuration and builds generation 0.
    pub fn new(problem: Knapsack, config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(entropy_seed);
        tracing::debug!(
            seed,
            items = problem.item_count(),
            capacity = problem.capacity(),
            population_size = config.population_size,
            iterations = config.iterations,
            "engine created"
        );

        let mut rng = create_rng(seed);
        let population = (0..config.population_size)
            .map(|_| problem.random_chromosome(&mut rng))
            .collect();
        let solution = Solution::empty(problem.item_count());

        Ok(Self {
            fitness_history: Vec::with_capacity(config.iterations),
            problem,
            config,
            seed,
            rng,
            population,
            solution,
            generation: 0,
        })
    }

    /// Runs the remaining generations and returns the best solution.
    pub fn solve(&mut self) -> &Solution {
        self.solve_with(&mut NoopObserver)
    }

    /// Runs the remaining generations, reporting to `observer`.
    ///
    /// Once `iterations` generations have completed this returns
    /// immediately.
    pub fn solve_with<O: EvolutionObserver + ?Sized>(&mut self, observer: &mut O) -> &Solution {
        while self.generation < self.config.iterations {
            self.step(observer);
        }
        &self.solution
    }

    /// Runs exactly one generation. Returns whether the solution improved.
    ///
    /// Not bounded by `iterations`: once [`is_done`](Self::is_done) holds,
    /// further calls keep evolving and report progress with
    /// `generation >= total`.
    pub fn step<O: EvolutionObserver + ?Sized>(&mut self, observer: &mut O) -> bool {
        let generation = self.generation;
        observer.on_progress(generation, self.config.iterations);

        // 1. Evaluate
        let fitnesses: Vec<Fitness> = self
            .population
            .iter()
            .map(|chromosome| self.problem.evaluate(chromosome))
            .collect();

        // 2. Track best
        let (best_idx, best_fitness) = fittest(&fitnesses);
        let improved = best_fitness > self.solution.fitness;
        if improved {
            self.solution = Solution {
                chromosome: self.population[best_idx].clone(),
                fitness: best_fitness,
            };
            observer.on_improvement(best_fitness, generation);
        }
        self.fitness_history.push(self.solution.fitness);
        observer.on_generation(&GenerationStats::from_fitnesses(
            generation,
            &fitnesses,
            self.solution.fitness,
        ));

        // 3. Breed: elite seed, then one child per pair of parents
        let size = self.config.population_size;
        let sum = fitness_sum(&fitnesses);
        let mut next = Vec::with_capacity(size);
        next.push(self.solution.chromosome.clone());
        while next.len() < size {
            let parent1 = select(&self.population, &fitnesses, sum, &mut self.rng);
            let parent2 = select(&self.population, &fitnesses, sum, &mut self.rng);
            next.push(crossover(parent1, parent2, &mut self.rng));
        }

        // 4. Mutate everything, elite included
        for chromosome in &mut next {
            mutate(chromosome, self.config.mutation_rate, &mut self.rng);
        }

        self.population = next;
        self.generation += 1;
        improved
    }

    /// The best solution found so far.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// The seed the generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether the configured number of generations has run.
    pub fn is_done(&self) -> bool {
        self.generation >= self.config.iterations
    }

    /// The current (not yet evaluated) population.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Best-known fitness after each completed generation.
    pub fn fitness_history(&self) -> &[Fitness] {
        &self.fitness_history
    }

    pub fn problem(&self) -> &Knapsack {
        &self.problem
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

/// Index and value of the highest fitness; the first one wins ties.
fn fittest(fitnesses: &[Fitness]) -> (usize, Fitness) {
    let mut best = (0, fitnesses[0]);
    for (i, &fitness) in fitnesses.iter().enumerate().skip(1) {
        if fitness > best.1 {
            best = (i, fitness);
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::operators::random_chromosome;
    use crate::ga::Item;

    fn small() -> Knapsack {
        Knapsack::new(
            vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)],
            5,
        )
        .unwrap()
    }

    fn medium() -> Knapsack {
        let items = (0..12)
            .map(|i| Item::new(3 + (i * 7) % 11, 5 + (i * 13) % 17))
            .collect();
        Knapsack::new(items, 30).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        progress: Vec<(usize, usize)>,
        improvements: Vec<(Fitness, usize)>,
        stats: Vec<GenerationStats>,
    }

    impl EvolutionObserver for Recorder {
        fn on_progress(&mut self, generation: usize, total: usize) {
            self.progress.push((generation, total));
        }

        fn on_improvement(&mut self, fitness: Fitness, generation: usize) {
            self.improvements.push((fitness, generation));
        }

        fn on_generation(&mut self, stats: &GenerationStats) {
            self.stats.push(*stats);
        }
    }

    #[test]
    fn test_converges_to_brute_force_optimum() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_iterations(50)
            .with_mutation_rate(0.01)
            .with_seed(42);
        let mut engine = EvolutionEngine::new(small(), config).unwrap();

        let solution = engine.solve().clone();

        assert_eq!(solution.fitness, 7);
        assert_eq!(solution.chromosome.selected().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(engine.problem().weight_of(&solution.chromosome), 5);
        assert_eq!(Some(solution), engine.problem().exhaustive_optimum());
    }

    #[test]
    fn test_zero_iterations_keeps_empty_solution() {
        let config = GaConfig::default().with_iterations(0).with_seed(42);
        let mut engine = EvolutionEngine::new(small(), config).unwrap();

        let solution = engine.solve();
        assert_eq!(solution, &Solution::empty(3));
        assert_eq!(engine.generation(), 0);
        assert!(engine.fitness_history().is_empty());
        assert!(engine.is_done());
    }

    #[test]
    fn test_generation_zero_is_built_on_construction() {
        let config = GaConfig::default().with_population_size(13).with_seed(42);
        let engine = EvolutionEngine::new(small(), config).unwrap();
        assert_eq!(engine.population().len(), 13);
        assert!(engine.population().iter().all(|c| c.len() == 3));
    }

    #[test]
    fn test_solution_fitness_never_decreases() {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_iterations(100)
            .with_mutation_rate(0.2)
            .with_seed(42);
        let mut engine = EvolutionEngine::new(medium(), config).unwrap();
        engine.solve();

        let history = engine.fitness_history();
        assert_eq!(history.len(), 100);
        for window in history.windows(2) {
            assert!(window[0] <= window[1], "fitness decreased: {window:?}");
        }
        assert_eq!(*history.last().unwrap(), engine.solution().fitness);
    }

    #[test]
    fn test_solution_is_feasible_and_scores_its_fitness() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_iterations(60)
            .with_seed(7);
        let mut engine = EvolutionEngine::new(medium(), config).unwrap();
        let solution = engine.solve().clone();

        assert!(solution.fitness > 0);
        assert!(engine.problem().is_feasible(&solution.chromosome));
        assert_eq!(engine.problem().evaluate(&solution.chromosome), solution.fitness);
        let optimum = engine.problem().exhaustive_optimum().unwrap();
        assert!(solution.fitness <= optimum.fitness);
    }

    #[test]
    fn test_events() {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_iterations(40)
            .with_mutation_rate(0.1)
            .with_seed(42);
        let mut engine = EvolutionEngine::new(medium(), config).unwrap();
        let mut recorder = Recorder::default();
        engine.solve_with(&mut recorder);

        let expected: Vec<(usize, usize)> = (0..40).map(|g| (g, 40)).collect();
        assert_eq!(recorder.progress, expected);
        assert_eq!(recorder.stats.len(), 40);

        // One improvement event per strict increase of the best-known fitness.
        let mut previous = 0;
        let mut increases = Vec::new();
        for (generation, &fitness) in engine.fitness_history().iter().enumerate() {
            if fitness > previous {
                increases.push((fitness, generation));
                previous = fitness;
            }
        }
        assert_eq!(recorder.improvements, increases);
        assert!(!recorder.improvements.is_empty());
        assert_eq!(recorder.improvements.last().unwrap().0, engine.solution().fitness);

        for stats in &recorder.stats {
            assert!(stats.best_fitness <= stats.solution_fitness);
        }
    }

    #[test]
    fn test_step_reports_improvement() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_iterations(5)
            .with_seed(42);
        let mut engine = EvolutionEngine::new(small(), config).unwrap();

        // 50 fair-coin chromosomes over 3 items: some feasible one scores > 0.
        assert!(engine.step(&mut NoopObserver));
        assert!(engine.solution().fitness > 0);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_population_size_is_constant() {
        let config = GaConfig::default()
            .with_population_size(17)
            .with_iterations(10)
            .with_seed(3);
        let mut engine = EvolutionEngine::new(medium(), config).unwrap();
        for _ in 0..10 {
            engine.step(&mut NoopObserver);
            assert_eq!(engine.population().len(), 17);
        }
    }

    #[test]
    fn test_elite_copy_is_mutated() {
        // With rate 1.0 every gene flips, so slot 0 is the exact complement
        // of the recorded solution.
        let config = GaConfig::default()
            .with_population_size(10)
            .with_iterations(1)
            .with_mutation_rate(1.0)
            .with_seed(42);
        let mut engine = EvolutionEngine::new(small(), config).unwrap();
        engine.solve();

        let complement: Vec<bool> = engine.solution().chromosome.iter().map(|g| !g).collect();
        assert_eq!(engine.population()[0].genes(), complement.as_slice());
    }

    #[test]
    fn test_elite_copy_survives_without_mutation() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_iterations(3)
            .with_mutation_rate(0.0)
            .with_seed(42);
        let mut engine = EvolutionEngine::new(medium(), config).unwrap();
        engine.solve();
        assert_eq!(&engine.population()[0], &engine.solution().chromosome);
    }

    #[test]
    fn test_single_individual_population() {
        let config = GaConfig::default()
            .with_population_size(1)
            .with_iterations(20)
            .with_mutation_rate(0.3)
            .with_seed(42);
        let mut engine = EvolutionEngine::new(small(), config).unwrap();
        engine.solve();
        assert_eq!(engine.population().len(), 1);
        assert_eq!(engine.generation(), 20);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let config = GaConfig::default()
            .with_population_size(25)
            .with_iterations(30)
            .with_mutation_rate(0.05)
            .with_seed(99);
        let mut a = EvolutionEngine::new(medium(), config.clone()).unwrap();
        let mut b = EvolutionEngine::new(medium(), config).unwrap();
        a.solve();
        b.solve();

        assert_eq!(a.solution(), b.solution());
        assert_eq!(a.fitness_history(), b.fitness_history());
        assert_eq!(a.population(), b.population());
    }

    #[test]
    fn test_entropy_seed_is_exposed() {
        let config = GaConfig::default()
            .with_population_size(25)
            .with_iterations(30);
        let mut first = EvolutionEngine::new(medium(), config.clone()).unwrap();
        first.solve();

        let mut replay =
            EvolutionEngine::new(medium(), config.with_seed(first.seed())).unwrap();
        replay.solve();

        assert_eq!(first.solution(), replay.solution());
        assert_eq!(first.population(), replay.population());
    }

    #[test]
    fn test_solve_is_idempotent_after_completion() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_iterations(5)
            .with_seed(1);
        let mut engine = EvolutionEngine::new(small(), config).unwrap();
        engine.solve();
        let population = engine.population().to_vec();
        engine.solve();
        assert_eq!(engine.generation(), 5);
        assert_eq!(engine.population(), population.as_slice());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = EvolutionEngine::new(small(), GaConfig::default().with_population_size(0))
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyPopulation);

        let err = EvolutionEngine::new(small(), GaConfig::default().with_mutation_rate(2.0))
            .unwrap_err();
        assert_eq!(err, ConfigError::MutationRateOutOfRange(2.0));
    }

    #[test]
    fn test_step_runs_past_configured_iterations() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_iterations(2)
            .with_seed(4);
        let mut engine = EvolutionEngine::new(small(), config).unwrap();
        engine.solve();
        assert!(engine.is_done());

        let mut recorder = Recorder::default();
        engine.step(&mut recorder);
        assert_eq!(recorder.progress, vec![(2, 2)]);
        assert_eq!(engine.generation(), 3);
        assert_eq!(engine.fitness_history().len(), 3);
    }

    #[test]
    fn test_draw_order_matches_hand_replay() {
        // Generation 0 from the factory, then per child: parent 1, parent 2,
        // cut; then one mutation draw per gene over the whole population.
        let items = (0..8u64)
            .map(|i| Item::new(2 + i % 5, 3 + (i * 5) % 7))
            .collect();
        let knapsack = Knapsack::new(items, 12).unwrap();
        let (size, rate, seed) = (6, 0.2, 5);
        let config = GaConfig::default()
            .with_population_size(size)
            .with_iterations(3)
            .with_mutation_rate(rate)
            .with_seed(seed);
        let mut engine = EvolutionEngine::new(knapsack.clone(), config).unwrap();

        let mut rng = create_rng(seed);
        let mut population: Vec<Chromosome> =
            (0..size).map(|_| random_chromosome(8, &mut rng)).collect();
        let mut solution = Solution::empty(8);
        assert_eq!(engine.population(), population.as_slice());

        for _ in 0..3 {
            let fitnesses: Vec<Fitness> =
                population.iter().map(|c| knapsack.evaluate(c)).collect();
            let mut best_idx = 0;
            for (i, &fitness) in fitnesses.iter().enumerate() {
                if fitness > fitnesses[best_idx] {
                    best_idx = i;
                }
            }
            if fitnesses[best_idx] > solution.fitness {
                solution = Solution {
                    chromosome: population[best_idx].clone(),
                    fitness: fitnesses[best_idx],
                };
            }

            let sum = fitness_sum(&fitnesses);
            let mut next = vec![solution.chromosome.clone()];
            while next.len() < size {
                let parent1 = select(&population, &fitnesses, sum, &mut rng);
                let parent2 = select(&population, &fitnesses, sum, &mut rng);
                next.push(crossover(parent1, parent2, &mut rng));
            }
            for chromosome in &mut next {
                mutate(chromosome, rate, &mut rng);
            }
            population = next;

            engine.step(&mut NoopObserver);
            assert_eq!(engine.population(), population.as_slice());
            assert_eq!(engine.solution(), &solution);
        }
    }

    #[test]
    fn test_fittest_prefers_first_on_ties() {
        assert_eq!(fittest(&[1, 5, 3, 5]), (1, 5));
        assert_eq!(fittest(&[0, 0, 0]), (0, 0));
    }

    #[test]
    fn test_all_infeasible_population_keeps_empty_solution() {
        // Every item is heavier than the capacity: all chromosomes score 0.
        let knapsack = Knapsack::new(vec![Item::new(10, 1); 4], 5).unwrap();
        let config = GaConfig::default()
            .with_population_size(8)
            .with_iterations(10)
            .with_seed(42);
        let mut engine = EvolutionEngine::new(knapsack, config).unwrap();
        let mut recorder = Recorder::default();
        engine.solve_with(&mut recorder);

        assert_eq!(engine.solution(), &Solution::empty(4));
        assert!(recorder.improvements.is_empty());
    }
}
