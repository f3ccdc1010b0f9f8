//! Greedy steepest-ascent hill climbing with random restarts.
//!
//! Each restart starts from a random board and repeatedly applies the single
//! queen move that lowers the conflict count the most. When no move improves
//! the board the restart has reached a local minimum and a fresh board is
//! drawn. Every candidate move is scored by recounting all conflicts, so one
//! sweep costs O(N³).
//!
//! # References
//!
//! - Russell & Norvig (2010), *Artificial Intelligence: A Modern Approach*, §4.1.1

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::{GreedyResult, GreedyRunner};
