//! Greedy hill-climbing benchmark over repeated trials.
//!
//! Usage:
//!   cargo run --release --bin greedy_search
//!   RUST_LOG=nqueens_bench=debug cargo run --release --bin greedy_search
//!
//! Edit the constants below to change the board size or restart budget.

use nqueens_bench::bench::{self, measure, BenchmarkSummary, Measurement, PeakAllocator};
use nqueens_bench::greedy::{GreedyConfig, GreedyRunner};
use nqueens_bench::random::rng_from_seed;
use nqueens_bench::ConfigError;

#[global_allocator]
static ALLOC: PeakAllocator = PeakAllocator::new();

const N: usize = 50;
const TOTAL_RUNS: usize = 10;
const SEED: Option<u64> = None;

const MAX_RESTARTS: usize = 25;

fn main() -> Result<(), ConfigError> {
    bench::init_logging();

    let config = GreedyConfig::default().with_max_restarts(MAX_RESTARTS);
    config.validate()?;

    let mut rng = rng_from_seed(SEED);
    let mut summary = BenchmarkSummary::new(N);

    println!("--- Running Greedy Search for N={N} over {TOTAL_RUNS} trials ---");

    for trial in 1..=TOTAL_RUNS {
        println!("Starting Trial {trial}/{TOTAL_RUNS}...");

        let Measurement {
            value,
            elapsed,
            peak_bytes,
        } = measure(&ALLOC, || GreedyRunner::run_with_rng(N, &config, &mut rng));
        let result = value?;
        summary.record(elapsed, peak_bytes, result.is_solved());

        if result.is_solved() {
            println!(
                "  -> Trial {trial} Result: SUCCESS (found solution in {} restarts)",
                result.restarts
            );
        } else {
            println!(
                "  -> Trial {trial} Result: FAILURE (best board had {} conflicts)",
                result.conflicts
            );
        }
    }

    println!();
    println!("{summary}");
    Ok(())
}
