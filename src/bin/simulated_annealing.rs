//! Simulated Annealing benchmark over repeated trials.
//!
//! Usage:
//!   cargo run --release --bin simulated_annealing
//!
//! Edit the constants below to change the board size or cooling schedule.

use nqueens_bench::bench::{self, measure, BenchmarkSummary, Measurement, PeakAllocator};
use nqueens_bench::random::rng_from_seed;
use nqueens_bench::sa::{SaConfig, SaRunner};
use nqueens_bench::ConfigError;

#[global_allocator]
static ALLOC: PeakAllocator = PeakAllocator::new();

const N: usize = 200;
const TOTAL_RUNS: usize = 10;
const SEED: Option<u64> = None;

const INITIAL_TEMPERATURE: f64 = 1000.0;
const COOLING_RATE: f64 = 0.995;
const MAX_ITERATIONS: usize = 20_000;

fn main() -> Result<(), ConfigError> {
    bench::init_logging();

    let config = SaConfig::default()
        .with_initial_temperature(INITIAL_TEMPERATURE)
        .with_cooling_rate(COOLING_RATE)
        .with_max_iterations(MAX_ITERATIONS);
    config.validate()?;

    let mut rng = rng_from_seed(SEED);
    let mut summary = BenchmarkSummary::new(N);

    println!("--- Running Simulated Annealing for N={N} over {TOTAL_RUNS} trials ---");

    for trial in 1..=TOTAL_RUNS {
        println!("Starting Trial {trial}/{TOTAL_RUNS}...");

        let Measurement {
            value,
            elapsed,
            peak_bytes,
        } = measure(&ALLOC, || SaRunner::run_with_rng(N, &config, &mut rng));
        let result = value?;
        summary.record(elapsed, peak_bytes, result.is_solved());

        if result.is_solved() {
            println!("  -> Trial {trial} Result: SUCCESS");
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
