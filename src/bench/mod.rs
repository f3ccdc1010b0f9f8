//! Benchmark harness shared by the solver binaries.
//!
//! - [`PeakAllocator`]: counting global allocator for peak heap usage
//! - [`measure`]: times a closure and records its peak heap growth
//! - [`BenchmarkSummary`]: accumulates trials and prints the report block
//! - [`init_logging`]: installs the `tracing` subscriber

mod peak;
mod summary;

pub use peak::PeakAllocator;
pub use summary::{measure, BenchmarkSummary, Measurement};

use std::sync::OnceLock;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Installs a stderr `tracing` subscriber.
///
/// The filter defaults to `info` and can be overridden with
/// `RUST_LOG`, e.g. `RUST_LOG=nqueens_bench=debug` to see restarts and
/// generation progress. Safe to call multiple times; only the first call
/// has effect.
pub fn init_logging() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
    });
}
