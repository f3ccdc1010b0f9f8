//! SA execution loop.

use super::config::SaConfig;
use crate::board::Board;
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The board when the run stopped.
    pub board: Board,

    /// Attacking pairs on `board`. Zero means solved.
    pub conflicts: usize,

    /// Total number of iterations (moves evaluated).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,
}

impl SaResult {
    pub fn is_solved(&self) -> bool {
        self.conflicts == 0
    }
}

/// Outcome of one annealing move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Improved(usize),
    Accepted(usize),
    Rejected,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on an `n`-queen board with a generator seeded from the
    /// configuration.
    pub fn run(n: usize, config: &SaConfig) -> Result<SaResult, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(n, config, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`.
    ///
    /// Stops after `max_iterations`, once the temperature is no longer above
    /// `min_temperature`, or when conflicts reach zero, whichever comes
    /// first.
    pub fn run_with_rng<R: Rng>(
        n: usize,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult, ConfigError> {
        if n == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        config.validate()?;

        let mut board = Board::random(n, rng);
        let mut conflicts = board.conflicts();

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while iterations < config.max_iterations
            && temperature > config.min_temperature
            && conflicts > 0
        {
            match anneal_step(&mut board, conflicts, temperature, rng) {
                Step::Improved(c) => {
                    conflicts = c;
                    improving_moves += 1;
                    accepted_moves += 1;
                }
                Step::Accepted(c) => {
                    conflicts = c;
                    accepted_moves += 1;
                }
                Step::Rejected => {}
            }

            // Cool down
            temperature *= config.cooling_rate;
            iterations += 1;
        }

        tracing::debug!(
            n,
            iterations,
            final_temperature = temperature,
            accepted_moves,
            improving_moves,
            conflicts,
            "annealing finished"
        );

        Ok(SaResult {
            board,
            conflicts,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        })
    }
}

/// Moves one random queen to a random position and applies the Metropolis
/// criterion. On rejection the board is restored in place.
fn anneal_step<R: Rng>(
    board: &mut Board,
    conflicts: usize,
    temperature: f64,
    rng: &mut R,
) -> Step {
    let n = board.len();
    let index = rng.random_range(0..n);
    let position = rng.random_range(0..n);

    let previous = board.set(index, position);
    let new_conflicts = board.conflicts();

    if new_conflicts < conflicts {
        return Step::Improved(new_conflicts);
    }

    let delta = (new_conflicts - conflicts) as f64;
    let probability = (-delta / temperature).exp();
    if rng.random_range(0.0..1.0) < probability {
        Step::Accepted(new_conflicts)
    } else {
        board.set(index, previous);
        Step::Rejected
    }
}
