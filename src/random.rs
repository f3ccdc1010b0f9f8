//! Seedable random number generation.
//!
//! Every stochastic solver takes an explicit `&mut R: Rng`. The runners
//! build one from the config seed with [`create_rng`], so a fixed seed
//! reproduces a run exactly.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The generator used by the solver runners.
pub type SolverRng = ChaCha8Rng;

/// Creates a generator from a fixed seed.
pub fn create_rng(seed: u64) -> SolverRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from a fresh random seed when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> SolverRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
