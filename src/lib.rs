//! N-Queens solver benchmarks.
//!
//! Four independent strategies for placing N non-attacking queens:
//!
//! - **Exhaustive search**: Deterministic row-by-row backtracking that
//!   returns the lexicographically first solution.
//! - **Genetic Algorithm (GA)**: Population-based search with tournament
//!   selection, single-point crossover and reset mutation.
//! - **Greedy search**: Steepest-ascent hill climbing with random restarts.
//! - **Simulated Annealing (SA)**: Single-board trajectory search with
//!   geometric cooling.
//!
//! All solvers share the attack oracle in [`board`]. Stochastic solvers take
//! an explicit seedable generator (see [`random`]) so any run can be
//! reproduced. The [`bench`] module provides the timing and peak-memory
//! harness used by the binaries in `src/bin`.

pub mod bench;
pub mod board;
pub mod error;
pub mod exhaustive;
pub mod ga;
pub mod greedy;
pub mod random;
pub mod sa;

pub use board::{count_conflicts, is_safe, max_pairs, Board, BoardError};
pub use error::ConfigError;
