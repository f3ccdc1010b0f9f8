//! Genetic Algorithm for N-Queens.
//!
//! Each individual is a [`Board`](crate::board::Board) scored by the number
//! of non-attacking queen pairs. A generation is evaluated, checked for a
//! perfect individual, and then replaced wholesale by offspring built from
//! tournament selection, single-point crossover and reset mutation.
//!
//! There is no elitism: the best individual of one generation may not
//! survive into the next.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, tournament size, mutation rate, limits
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best board found and run statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use types::Individual;
