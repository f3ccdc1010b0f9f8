//! Trial measurement and the performance summary report.

use super::peak::PeakAllocator;
use std::fmt;
use std::time::{Duration, Instant};

const BYTES_PER_MB: f64 = 1_000_000.0;
const RULE: &str = "========================================";

/// Outcome of one measured call.
#[derive(Debug, Clone)]
pub struct Measurement<T> {
    /// What the measured closure returned.
    pub value: T,
    /// Wall-clock time spent in the closure.
    pub elapsed: Duration,
    /// Peak heap growth above the allocation level at entry, in bytes.
    pub peak_bytes: usize,
}

impl<T> Measurement<T> {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Peak heap growth in megabytes (10^6 bytes).
    pub fn peak_mb(&self) -> f64 {
        self.peak_bytes as f64 / BYTES_PER_MB
    }
}

/// Runs `f`, timing it and recording its peak heap growth on `allocator`.
///
/// The numbers are only meaningful when `allocator` is the installed
/// `#[global_allocator]`; otherwise `peak_bytes` is 0.
pub fn measure<T, F: FnOnce() -> T>(allocator: &PeakAllocator, f: F) -> Measurement<T> {
    let baseline = allocator.current();
    allocator.reset_peak();

    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();

    let peak_bytes = allocator.peak().saturating_sub(baseline);

    Measurement {
        value,
        elapsed,
        peak_bytes,
    }
}

/// Aggregated statistics over a series of trials.
///
/// `Display` renders the summary block printed at the end of a benchmark:
///
/// ```
/// use nqueens_bench::bench::BenchmarkSummary;
/// use std::time::Duration;
///
/// let mut summary = BenchmarkSummary::new(8);
/// summary.record(Duration::from_millis(250), 2_000_000, true);
/// summary.record(Duration::from_millis(750), 4_000_000, false);
///
/// let report = summary.to_string();
/// assert!(report.contains("Average Execution Time: 0.500000 seconds"));
/// assert!(report.contains("Average Peak Memory:    3.000000 MB"));
/// assert!(report.contains("Success Rate:           50.0% (1/2 successful runs)"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BenchmarkSummary {
    n: usize,
    times: Vec<Duration>,
    peaks: Vec<usize>,
    successes: usize,
}

impl BenchmarkSummary {
    /// Creates an empty summary for board size `n`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    /// Adds one trial.
    pub fn record(&mut self, elapsed: Duration, peak_bytes: usize, success: bool) {
        self.times.push(elapsed);
        self.peaks.push(peak_bytes);
        if success {
            self.successes += 1;
        }
    }

    /// Adds one trial from a [`Measurement`].
    pub fn record_measurement<T>(&mut self, measurement: &Measurement<T>, success: bool) {
        self.record(measurement.elapsed, measurement.peak_bytes, success);
    }

    pub fn trials(&self) -> usize {
        self.times.len()
    }

    pub fn successes(&self) -> usize {
        self.successes
    }

    /// Mean execution time in seconds, or `None` without trials.
    pub fn average_secs(&self) -> Option<f64> {
        mean(self.times.iter().map(Duration::as_secs_f64))
    }

    /// Mean peak memory in megabytes, or `None` without trials.
    pub fn average_peak_mb(&self) -> Option<f64> {
        mean(self.peaks.iter().map(|&b| b as f64 / BYTES_PER_MB))
    }

    /// Percentage of successful trials; 0 without trials.
    pub fn success_rate(&self) -> f64 {
        if self.trials() == 0 {
            return 0.0;
        }
        self.successes as f64 / self.trials() as f64 * 100.0
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> Option<f64> {
    let len = values.len();
    if len == 0 {
        return None;
    }
    Some(values.sum::<f64>() / len as f64)
}

impl fmt::Display for BenchmarkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "      PERFORMANCE SUMMARY FOR N={}", self.n)?;
        writeln!(f, "{RULE}")?;

        match self.average_secs() {
            Some(secs) => writeln!(f, "Average Execution Time: {secs:.6} seconds")?,
            None => writeln!(f, "No runs to calculate average time.")?,
        }
        match self.average_peak_mb() {
            Some(mb) => writeln!(f, "Average Peak Memory:    {mb:.6} MB")?,
            None => writeln!(f, "No runs to calculate average memory.")?,
        }

        writeln!(
            f,
            "Success Rate:           {:.1}% ({}/{} successful runs)",
            self.success_rate(),
            self.successes,
            self.trials()
        )?;
        writeln!(f, "{RULE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = BenchmarkSummary::new(4);
        assert_eq!(summary.trials(), 0);
        assert_eq!(summary.average_secs(), None);
        assert_eq!(summary.average_peak_mb(), None);
        assert_eq!(summary.success_rate(), 0.0);

        let report = summary.to_string();
        assert!(report.contains("No runs to calculate average time."));
        assert!(report.contains("Success Rate:           0.0% (0/0 successful runs)"));
    }

    #[test]
    fn test_report_layout() {
        let mut summary = BenchmarkSummary::new(50);
        summary.record(Duration::from_micros(1_500_000), 1_234_567, true);
        summary.record(Duration::from_micros(500_000), 765_433, true);
        summary.record(Duration::from_micros(1_000_000), 1_000_000, false);

        let expected = "\
========================================
      PERFORMANCE SUMMARY FOR N=50
========================================
Average Execution Time: 1.000000 seconds
Average Peak Memory:    1.000000 MB
Success Rate:           66.7% (2/3 successful runs)
========================================
";
        assert_eq!(summary.to_string(), expected);
    }

    #[test]
    fn test_measure_returns_value() {
        let tracker = PeakAllocator::new();
        let m = measure(&tracker, || 6 * 7);
        assert_eq!(m.value, 42);
        // Not installed as the global allocator, so nothing is counted.
        assert_eq!(m.peak_bytes, 0);
        assert!(m.elapsed_secs() >= 0.0);
    }

    #[test]
    fn test_record_measurement() {
        let mut summary = BenchmarkSummary::new(8);
        let m = Measurement {
            value: (),
            elapsed: Duration::from_secs(2),
            peak_bytes: 500_000,
        };
        summary.record_measurement(&m, true);
        assert_eq!(summary.successes(), 1);
        assert_eq!(m.peak_mb(), 0.5);
        assert_eq!(summary.average_secs(), Some(2.0));
    }
}
