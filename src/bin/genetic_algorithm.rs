//! Genetic Algorithm benchmark over repeated trials.
//!
//! Usage:
//!   cargo run --release --bin genetic_algorithm
//!   RUST_LOG=nqueens_bench=debug cargo run --release --bin genetic_algorithm
//!
//! Edit the constants below to change the board size or GA parameters.

use nqueens_bench::bench::{self, measure, BenchmarkSummary, Measurement, PeakAllocator};
use nqueens_bench::ga::{GaConfig, GaRunner};
use nqueens_bench::random::rng_from_seed;
use nqueens_bench::ConfigError;

#[global_allocator]
static ALLOC: PeakAllocator = PeakAllocator::new();

const N: usize = 50;
const TOTAL_RUNS: usize = 10;
const SEED: Option<u64> = None;

const POP_SIZE: usize = 150;
const MUTATION_RATE: f64 = 0.1;
const MAX_GENERATIONS: usize = 2000;

fn main() -> Result<(), ConfigError> {
    bench::init_logging();

    let config = GaConfig::default()
        .with_population_size(POP_SIZE)
        .with_mutation_rate(MUTATION_RATE)
        .with_max_generations(MAX_GENERATIONS);
    config.validate()?;

    let mut rng = rng_from_seed(SEED);
    let mut summary = BenchmarkSummary::new(N);

    println!("--- Running Genetic Algorithm for N={N} over {TOTAL_RUNS} trials ---");

    for trial in 1..=TOTAL_RUNS {
        println!("Starting Trial {trial}/{TOTAL_RUNS}...");

        let Measurement {
            value,
            elapsed,
            peak_bytes,
        } = measure(&ALLOC, || GaRunner::run_with_rng(N, &config, &mut rng));
        let result = value?;
        summary.record(elapsed, peak_bytes, result.is_solved());

        if result.is_solved() {
            println!(
                "  -> Trial {trial} Result: SUCCESS (found in {} generations)",
                result.generations
            );
        } else {
            println!(
                "  -> Trial {trial} Result: FAILURE (best fitness: {}/{})",
                result.best_fitness, result.max_fitness
            );
        }
    }

    println!();
    println!("{summary}");
    Ok(())
}
