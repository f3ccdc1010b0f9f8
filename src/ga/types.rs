//! Population members.

use crate::board::Board;

/// A board together with its fitness.
///
/// Fitness is the number of non-attacking queen pairs, so higher is better
/// and a solution scores [`max_pairs`](crate::board::max_pairs).
///
/// Serialized as the bare board; fitness is recomputed on load.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Board", into = "Board"))]
pub struct Individual {
    board: Board,
    fitness: usize,
}

impl Individual {
    /// Evaluates `board` and wraps it.
    pub fn new(board: Board) -> Self {
        let fitness = board.fitness();
        Self { board, fitness }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Number of non-attacking pairs.
    pub fn fitness(&self) -> usize {
        self.fitness
    }

    /// Number of attacking pairs on this individual's board.
    pub fn conflicts(&self) -> usize {
        crate::board::max_pairs(self.board.len()) - self.fitness
    }
}

impl From<Board> for Individual {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

impl From<Individual> for Board {
    fn from(ind: Individual) -> Self {
        ind.board
    }
}
