//! Recursive backtracking over board rows.

use crate::board::{is_safe, Board};

/// Result of an exhaustive search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveResult {
    /// The first solution found, or `None` when the board size has none.
    pub board: Option<Board>,

    /// Number of queens placed during the search, including placements
    /// that were later undone.
    pub placements: usize,
}

impl ExhaustiveResult {
    pub fn is_solved(&self) -> bool {
        self.board.is_some()
    }
}

/// Runs the backtracking search.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Searches for a placement of `n` non-attacking queens.
    ///
    /// Recursion depth is bounded by `n`.
    pub fn solve(n: usize) -> ExhaustiveResult {
        let mut placed = Vec::with_capacity(n);
        let mut placements = 0usize;

        let board = if place_row(&mut placed, n, &mut placements) {
            Some(Board::from_vec_unchecked(placed))
        } else {
            None
        };

        tracing::debug!(n, placements, solved = board.is_some(), "exhaustive search finished");

        ExhaustiveResult { board, placements }
    }
}

/// Fills row `placed.len()` and every row after it.
///
/// On failure `placed` is left exactly as it was on entry.
fn place_row(placed: &mut Vec<usize>, n: usize, placements: &mut usize) -> bool {
    if placed.len() >= n {
        return true;
    }

    for col in 0..n {
        if !is_safe(placed, col) {
            continue;
        }

        placed.push(col);
        *placements += 1;

        if place_row(placed, n, placements) {
            return true;
        }

        // Backtrack
        placed.pop();
    }

    tracing::trace!(row = placed.len(), "no safe column");
    false
}
