//! Exhaustive backtracking search for a single board size.
//!
//! Usage:
//!   cargo run --release --bin exhaustive_search
//!
//! Edit the constants below to change the board size.

use nqueens_bench::bench::{self, measure, PeakAllocator};
use nqueens_bench::exhaustive::ExhaustiveRunner;

#[global_allocator]
static ALLOC: PeakAllocator = PeakAllocator::new();

const N: usize = 30;
const PRINT_BOARD: bool = false;

fn main() {
    bench::init_logging();

    println!("--- Exhaustive Search for N={N} ---");

    let measurement = measure(&ALLOC, || ExhaustiveRunner::solve(N));

    match &measurement.value.board {
        Some(board) => {
            if PRINT_BOARD {
                println!("Solution for N={N}:");
                print!("{board}");
            }
            println!("Solution found: {:?}", board.queens());
        }
        None => println!("Solution does not exist for N={N}"),
    }
    tracing::info!(placements = measurement.value.placements, "search effort");

    println!("Execution Time: {:.6} seconds", measurement.elapsed_secs());
    println!("Peak Memory Usage: {:.6} MB", measurement.peak_mb());
    println!("{}\n", "-".repeat(30));
}
