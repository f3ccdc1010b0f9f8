//! Exhaustive backtracking search.
//!
//! Places one queen per row, trying columns in ascending order and undoing
//! the last placement whenever a row has no safe column left. The search is
//! deterministic: it returns the first solution in lexicographic order.
//!
//! Boards of size 2 and 3 have no solution; every other size does.
//!
//! # References
//!
//! - Wirth (1976), *Algorithms + Data Structures = Programs*, §3.5

mod runner;

pub use runner::{ExhaustiveResult, ExhaustiveRunner};
