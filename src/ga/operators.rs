//! Crossover and mutation for board chromosomes.
//!
//! Boards are not permutations: several queens may share a position, so
//! plain positional operators are enough and never produce invalid
//! chromosomes.
//!
//! - [`single_point_crossover`]: prefix of one parent, suffix of the other
//! - [`random_crossover`]: single-point crossover at a random split
//! - [`reset_mutation`]: moves one random queen to a random position

use crate::board::Board;
use rand::Rng;

/// Builds a child from `parent1[..point]` followed by `parent2[point..]`.
///
/// # Panics
/// Panics if the parents differ in length or `point > parent1.len()`.
pub fn single_point_crossover(parent1: &[usize], parent2: &[usize], point: usize) -> Vec<usize> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(point <= parent1.len(), "crossover point out of range");

    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..point]);
    child.extend_from_slice(&parent2[point..]);
    child
}

/// Single-point crossover at a split drawn uniformly from `[1, n - 1]`.
///
/// Boards with fewer than two queens have no interior split; the child is a
/// copy of `parent1`.
pub fn random_crossover<R: Rng>(parent1: &Board, parent2: &Board, rng: &mut R) -> Board {
    let n = parent1.len();
    if n < 2 {
        return parent1.clone();
    }

    let point = rng.random_range(1..n);
    Board::from_vec_unchecked(single_point_crossover(
        parent1.queens(),
        parent2.queens(),
        point,
    ))
}

/// Overwrites one random queen with a random position.
///
/// The new position may equal the old one.
pub fn reset_mutation<R: Rng>(board: &mut Board, rng: &mut R) {
    let n = board.len();
    if n == 0 {
        return;
    }
    let index = rng.random_range(0..n);
    let position = rng.random_range(0..n);
    board.set(index, position);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_single_point_prefix_suffix() {
        let p1 = [0, 1, 2, 3, 4];
        let p2 = [4, 3, 2, 1, 0];
        for point in 1..5 {
            let child = single_point_crossover(&p1, &p2, point);
            assert_eq!(&child[..point], &p1[..point]);
            assert_eq!(&child[point..], &p2[point..]);
        }
    }

    #[test]
    fn test_single_point_edges() {
        let p1 = [1, 1, 1];
        let p2 = [2, 2, 2];
        assert_eq!(single_point_crossover(&p1, &p2, 0), vec![2, 2, 2]);
        assert_eq!(single_point_crossover(&p1, &p2, 3), vec![1, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_single_point_length_mismatch() {
        single_point_crossover(&[0, 1], &[0], 1);
    }

    #[test]
    fn test_random_crossover_uses_interior_point() {
        let p1 = Board::from_vec(vec![0; 6]).unwrap();
        let p2 = Board::from_vec(vec![5; 6]).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let child = random_crossover(&p1, &p2, &mut rng);
            let split = child.queens().iter().take_while(|&&q| q == 0).count();
            assert!((1..6).contains(&split), "split {split} not in [1, 5]");
            assert!(child.queens()[split..].iter().all(|&q| q == 5));
        }
    }

    #[test]
    fn test_random_crossover_single_queen() {
        let p1 = Board::from_vec(vec![0]).unwrap();
        let p2 = Board::from_vec(vec![0]).unwrap();
        let mut rng = create_rng(1);
        assert_eq!(random_crossover(&p1, &p2, &mut rng), p1);
    }

    #[test]
    fn test_reset_mutation_changes_at_most_one() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let original = Board::random(10, &mut rng);
            let mut mutated = original.clone();
            reset_mutation(&mut mutated, &mut rng);
            let changed = original
                .queens()
                .iter()
                .zip(mutated.queens())
                .filter(|(a, b)| a != b)
                .count();
            assert!(changed <= 1);
            assert!(mutated.queens().iter().all(|&q| q < 10));
        }
    }
}
