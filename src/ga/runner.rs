//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators::{random_crossover, reset_mutation};
use super::selection::tournament;
use super::types::Individual;
use crate::board::{max_pairs, Board};
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::Rng;

/// Generations between progress log events.
const PROGRESS_INTERVAL: usize = 50;

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The perfect individual, or the fittest of the final population.
    pub best: Board,

    /// Fitness of `best` (non-attacking pairs).
    pub best_fitness: usize,

    /// Fitness of a solution for this board size.
    pub max_fitness: usize,

    /// Generation in which the solution was found (1-based), or
    /// `max_generations` when none was found.
    pub generations: usize,

    /// Best fitness of each evaluated population, in order.
    pub fitness_history: Vec<usize>,
}

impl GaResult {
    pub fn is_solved(&self) -> bool {
        self.best_fitness == self.max_fitness
    }

    /// Attacking pairs left on `best`.
    pub fn conflicts(&self) -> usize {
        self.max_fitness - self.best_fitness
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use nqueens_bench::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_max_generations(50).with_seed(42);
/// let result = GaRunner::run(6, &config).unwrap();
/// assert!(result.best_fitness <= result.max_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on an `n`-queen board with a generator seeded from the
    /// configuration.
    pub fn run(n: usize, config: &GaConfig) -> Result<GaResult, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(n, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        n: usize,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, ConfigError> {
        if n == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        config.validate()?;

        let max_fitness = max_pairs(n);

        // 1. Initialize population
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::new(Board::random(n, rng)))
            .collect();

        let mut fitness_history = Vec::new();

        // 2. Evolutionary loop
        for generation in 1..=config.max_generations {
            let best_idx = fittest(&population);
            let best_fitness = population[best_idx].fitness();
            fitness_history.push(best_fitness);

            if let Some(idx) = population.iter().position(|ind| ind.fitness() == max_fitness) {
                tracing::debug!(n, generation, "ga found a solution");
                let best = population.swap_remove(idx);
                return Ok(GaResult {
                    best: best.into_board(),
                    best_fitness: max_fitness,
                    max_fitness,
                    generations: generation,
                    fitness_history,
                });
            }

            if generation % PROGRESS_INTERVAL == 0 {
                tracing::debug!(
                    generation,
                    max_generations = config.max_generations,
                    best_fitness,
                    max_fitness,
                    "ga progress"
                );
            }

            population = (0..config.population_size)
                .map(|_| {
                    let p1 = tournament(&population, config.tournament_size, rng);
                    let p2 = tournament(&population, config.tournament_size, rng);
                    let mut child =
                        random_crossover(population[p1].board(), population[p2].board(), rng);
                    if rng.random_range(0.0..1.0) < config.mutation_rate {
                        reset_mutation(&mut child, rng);
                    }
                    Individual::new(child)
                })
                .collect();
        }

        // 3. No solution within the budget: take the fittest survivor.
        let best_idx = fittest(&population);
        let best = population.swap_remove(best_idx);
        fitness_history.push(best.fitness());

        tracing::debug!(
            n,
            generations = config.max_generations,
            best_fitness = best.fitness(),
            max_fitness,
            "ga reached generation limit"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best: best.into_board(),
            max_fitness,
            generations: config.max_generations,
            fitness_history,
        })
    }
}

/// Index of the fittest individual; the first one wins ties.
fn fittest(population: &[Individual]) -> usize {
    let mut best_idx = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness() > population[best_idx].fitness() {
            best_idx = i;
        }
    }
    best_idx
}

// ============================================================================
// Tests
// ============================================================================
