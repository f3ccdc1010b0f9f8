//! Steepest-ascent hill climbing engine.
//!
//! # Algorithm
//!
//! 1. Draw a random board
//! 2. Scan every (queen, new position) move, scoring each in place
//! 3. Apply the move with the fewest conflicts if it strictly improves
//! 4. Stop on zero conflicts; restart from step 1 when no move improves

use super::config::GreedyConfig;
use crate::board::Board;
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::Rng;

/// Result of a greedy search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyResult {
    /// The solved board, or the final board of the last restart.
    pub board: Board,
    /// Attacking pairs on `board`. Zero means solved.
    pub conflicts: usize,
    /// Restarts used, counting the successful one (1-based).
    pub restarts: usize,
    /// Improving moves applied across all restarts.
    pub moves: usize,
}

impl GreedyResult {
    pub fn is_solved(&self) -> bool {
        self.conflicts == 0
    }
}

/// A single queen move and the conflict count it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    index: usize,
    position: usize,
    conflicts: usize,
}

/// Greedy hill-climbing runner.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs greedy search on an `n`-queen board with a generator seeded from
    /// the configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_bench::greedy::{GreedyConfig, GreedyRunner};
    ///
    /// let config = GreedyConfig::default().with_seed(42);
    /// let result = GreedyRunner::run(8, &config).unwrap();
    /// assert_eq!(result.board.conflicts(), result.conflicts);
    /// ```
    pub fn run(n: usize, config: &GreedyConfig) -> Result<GreedyResult, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(n, config, &mut rng)
    }

    /// Runs greedy search drawing all randomness from `rng`.
    pub fn run_with_rng<R: Rng>(
        n: usize,
        config: &GreedyConfig,
        rng: &mut R,
    ) -> Result<GreedyResult, ConfigError> {
        if n == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        config.validate()?;

        let mut moves = 0usize;
        let mut restarts = 0usize;

        loop {
            restarts += 1;
            tracing::debug!(
                restart = restarts,
                max_restarts = config.max_restarts,
                "greedy restart"
            );

            let mut board = Board::random(n, rng);
            let conflicts = climb(&mut board, &mut moves);

            if conflicts == 0 || restarts >= config.max_restarts {
                tracing::debug!(n, restarts, moves, conflicts, "greedy search finished");
                return Ok(GreedyResult {
                    board,
                    conflicts,
                    restarts,
                    moves,
                });
            }
        }
    }
}

/// Hill-climbs `board` until it is solved or no move improves it.
///
/// Returns the final conflict count.
fn climb(board: &mut Board, moves: &mut usize) -> usize {
    let mut conflicts = board.conflicts();

    while conflicts > 0 {
        // Local minimum
        let Some(mv) = best_move(board, conflicts) else {
            break;
        };

        board.set(mv.index, mv.position);
        conflicts = mv.conflicts;
        *moves += 1;
    }

    conflicts
}

/// Scans all single-queen moves and returns the one with the fewest
/// conflicts, if it is strictly below `conflicts`. The earliest move wins
/// ties. The board is unchanged on return.
fn best_move(board: &mut Board, conflicts: usize) -> Option<Move> {
    let n = board.len();
    let mut best: Option<Move> = None;
    let mut min_conflicts = conflicts;

    for index in 0..n {
        let original = board[index];
        for position in 0..n {
            if position == original {
                continue;
            }

            board.set(index, position);
            let candidate = board.conflicts();
            if candidate < min_conflicts {
                min_conflicts = candidate;
                best = Some(Move {
                    index,
                    position,
                    conflicts: candidate,
                });
            }
        }
        board.set(index, original);
    }

    best
}
