//! Board representation and the attack oracle.
//!
//! A board stores one queen per index: `queens[i] = j` places the queen of
//! index `i` at position `j`. Two queens attack each other when they share a
//! position or lie on the same diagonal (`|i - j| == |queens[i] - queens[j]|`).
//! Indices are distinct by construction, so those are the only two cases.

use std::fmt;
use std::ops::Index;

use rand::Rng;
use thiserror::Error;

/// Errors raised when building a [`Board`] from raw positions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("queen {index} is at position {value}, outside 0..{n}")]
    OutOfRange { index: usize, value: usize, n: usize },
}

/// Returns the number of unordered queen pairs on an `n`-queen board.
///
/// This is the fitness of a solved board: every pair is non-attacking.
pub fn max_pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Checks whether a queen can go at `col` in row `placed.len()`.
///
/// `placed` holds the positions of the rows already filled; only those are
/// inspected. O(row).
pub fn is_safe(placed: &[usize], col: usize) -> bool {
    let row = placed.len();
    placed
        .iter()
        .enumerate()
        .all(|(i, &c)| c != col && c.abs_diff(col) != row - i)
}

/// Counts attacking pairs on a complete board. O(n²).
pub fn count_conflicts(queens: &[usize]) -> usize {
    let n = queens.len();
    let mut conflicts = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if queens[i] == queens[j] || queens[i].abs_diff(queens[j]) == j - i {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// A full arrangement of N queens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Board {
    queens: Vec<usize>,
}

impl Board {
    /// Builds a board, checking that every position lies in `0..n`.
    pub fn from_vec(queens: Vec<usize>) -> Result<Self, BoardError> {
        let n = queens.len();
        if let Some((index, &value)) = queens.iter().enumerate().find(|&(_, &v)| v >= n) {
            return Err(BoardError::OutOfRange { index, value, n });
        }
        Ok(Self { queens })
    }

    /// Wraps positions already known to be in range.
    pub(crate) fn from_vec_unchecked(queens: Vec<usize>) -> Self {
        debug_assert!(queens.iter().all(|&v| v < queens.len()));
        Self { queens }
    }

    /// Creates a board with every queen at a uniformly random position.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let queens = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { queens }
    }

    pub fn len(&self) -> usize {
        self.queens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queens.is_empty()
    }

    pub fn queens(&self) -> &[usize] {
        &self.queens
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.queens
    }

    /// Moves queen `index` to `position`, returning its previous position.
    ///
    /// Used for in-place tentative moves: apply, measure, then `set` the
    /// returned value back to revert.
    ///
    /// # Panics
    /// Panics if `index` or `position` is not below [`len`](Self::len).
    pub fn set(&mut self, index: usize, position: usize) -> usize {
        let n = self.queens.len();
        assert!(
            position < n,
            "position {position} out of range for {n} queens"
        );
        std::mem::replace(&mut self.queens[index], position)
    }

    /// Number of attacking pairs.
    pub fn conflicts(&self) -> usize {
        count_conflicts(&self.queens)
    }

    /// Number of non-attacking pairs.
    pub fn fitness(&self) -> usize {
        max_pairs(self.len()) - self.conflicts()
    }

    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }
}

impl Index<usize> for Board {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.queens[index]
    }
}

impl TryFrom<Vec<usize>> for Board {
    type Error = BoardError;

    fn try_from(queens: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_vec(queens)
    }
}

impl From<Board> for Vec<usize> {
    fn from(board: Board) -> Self {
        board.queens
    }
}

impl AsRef<[usize]> for Board {
    fn as_ref(&self) -> &[usize] {
        &self.queens
    }
}

/// Renders one line per index with `Q` at the queen's position, followed
/// by a dashed rule.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.len();
        for &q in &self.queens {
            for j in 0..n {
                f.write_str(if q == j { "Q " } else { ". " })?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(2 * n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    const EIGHT_QUEENS: [usize; 8] = [0, 4, 7, 5, 2, 6, 1, 3];

    #[test]
    fn test_known_solution_has_no_conflicts() {
        assert_eq!(count_conflicts(&EIGHT_QUEENS), 0);
    }

    #[test]
    fn test_shared_position_conflict() {
        assert_eq!(count_conflicts(&[0, 0]), 1);
    }

    #[test]
    fn test_diagonal_conflict() {
        assert_eq!(count_conflicts(&[0, 1]), 1);
        assert_eq!(count_conflicts(&[1, 0]), 1);
    }

    #[test]
    fn test_all_same_position() {
        // Every pair shares a position.
        assert_eq!(count_conflicts(&[2, 2, 2, 2]), 6);
    }

    #[test]
    fn test_main_diagonal() {
        assert_eq!(count_conflicts(&[0, 1, 2, 3, 4]), max_pairs(5));
    }

    #[test]
    fn test_trivial_boards() {
        assert_eq!(count_conflicts(&[]), 0);
        assert_eq!(count_conflicts(&[0]), 0);
    }

    #[test]
    fn test_max_pairs() {
        assert_eq!(max_pairs(0), 0);
        assert_eq!(max_pairs(1), 0);
        assert_eq!(max_pairs(2), 1);
        assert_eq!(max_pairs(8), 28);
    }

    #[test]
    fn test_is_safe_partial() {
        // Rows 0 and 1 filled at columns 0 and 2.
        let placed = [0, 2];
        assert!(!is_safe(&placed, 0), "same column as row 0");
        assert!(!is_safe(&placed, 1), "diagonal with row 1");
        assert!(!is_safe(&placed, 2), "same column as row 1");
        assert!(!is_safe(&placed, 3), "diagonal with row 1");
        assert!(is_safe(&placed, 4));
    }

    #[test]
    fn test_is_safe_empty() {
        assert!(is_safe(&[], 0));
    }

    #[test]
    fn test_is_safe_agrees_with_conflicts() {
        for prefix_len in 0..EIGHT_QUEENS.len() {
            let placed = &EIGHT_QUEENS[..prefix_len];
            assert!(is_safe(placed, EIGHT_QUEENS[prefix_len]));
        }
    }

    #[test]
    fn test_fitness_of_solution_is_max_pairs() {
        let board = Board::from_vec(EIGHT_QUEENS.to_vec()).unwrap();
        assert!(board.is_solution());
        assert_eq!(board.fitness(), 28);
    }

    #[test]
    fn test_from_vec_rejects_out_of_range() {
        let err = Board::from_vec(vec![0, 3, 1]).unwrap_err();
        assert_eq!(
            err,
            BoardError::OutOfRange {
                index: 1,
                value: 3,
                n: 3
            }
        );
    }

    #[test]
    fn test_random_board_in_range() {
        let mut rng = create_rng(42);
        let board = Board::random(20, &mut rng);
        assert_eq!(board.len(), 20);
        assert!(board.queens().iter().all(|&q| q < 20));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut board = Board::from_vec(vec![0, 1, 2]).unwrap();
        let old = board.set(1, 2);
        assert_eq!(old, 1);
        assert_eq!(board[1], 2);
        board.set(1, old);
        assert_eq!(board.queens(), &[0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_rejects_out_of_range() {
        let mut board = Board::from_vec(vec![0, 1, 2]).unwrap();
        board.set(0, 99);
    }

    #[test]
    fn test_try_from_validates() {
        assert!(Board::try_from(vec![1, 0]).is_ok());
        assert_eq!(
            Board::try_from(vec![7, 7]),
            Err(BoardError::OutOfRange {
                index: 0,
                value: 7,
                n: 2
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Board>("[7, 7]").is_err());

        let board: Board = serde_json::from_str("[1, 3, 0, 2]").unwrap();
        assert_eq!(board.queens(), &[1, 3, 0, 2]);
        assert_eq!(serde_json::to_string(&board).unwrap(), "[1,3,0,2]");
    }

    #[test]
    fn test_display() {
        let board = Board::from_vec(vec![1, 3, 0, 2]).unwrap();
        let expected = ". Q . . \n. . . Q \nQ . . . \n. . Q . \n--------\n";
        assert_eq!(board.to_string(), expected);
    }
}
