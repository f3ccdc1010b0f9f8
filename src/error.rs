//! Configuration errors shared by all solvers.

use thiserror::Error;

/// Errors raised when a solver configuration cannot be run.
///
/// Returned by the `validate` method of every config type and by the
/// runners before any search work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The board must hold at least one queen.
    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("tournament size must be at least 1")]
    EmptyTournament,

    /// A probability parameter fell outside `[0, 1]`.
    #[error("{name} must be in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    /// A temperature parameter was zero, negative or NaN.
    #[error("{name} must be positive, got {value}")]
    Temperature { name: &'static str, value: f64 },

    #[error("min_temperature ({min}) must be less than initial_temperature ({initial})")]
    TemperatureOrder { min: f64, initial: f64 },

    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRate(f64),

    #[error("max_restarts must be at least 1")]
    NoRestarts,
}
