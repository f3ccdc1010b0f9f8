//! Criterion benchmarks for the N-Queens solvers.
//!
//! Small boards with fixed seeds, so every iteration does the same work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nqueens_bench::count_conflicts;
use nqueens_bench::exhaustive::ExhaustiveRunner;
use nqueens_bench::ga::{GaConfig, GaRunner};
use nqueens_bench::greedy::{GreedyConfig, GreedyRunner};
use nqueens_bench::random::create_rng;
use nqueens_bench::sa::{SaConfig, SaRunner};
use nqueens_bench::Board;

// ===========================================================================
// Oracle
// ===========================================================================

fn bench_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_conflicts");

    for &n in &[8usize, 50, 200] {
        let board = Board::random(n, &mut create_rng(42));
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| count_conflicts(black_box(board.queens())))
        });
    }
    group.finish();
}

// ===========================================================================
// Solvers
// ===========================================================================

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);

    for &n in &[8usize, 16, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| ExhaustiveRunner::solve(black_box(n)))
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);

    for (n, pop, gen) in [(8usize, 50usize, 200usize), (12, 100, 100)] {
        let config = GaConfig {
            population_size: pop,
            max_generations: gen,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), n),
            &config,
            |b, config| b.iter(|| GaRunner::run(black_box(n), black_box(config))),
        );
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    group.sample_size(10);

    for &n in &[8usize, 16, 24] {
        let config = GreedyConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| GreedyRunner::run(black_box(n), black_box(config)))
        });
    }
    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa");
    group.sample_size(10);

    for &n in &[8usize, 32, 64] {
        let config = SaConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| SaRunner::run(black_box(n), black_box(config)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_conflicts,
    bench_exhaustive,
    bench_ga,
    bench_greedy,
    bench_sa
);
criterion_main!(benches);
