//! SA configuration.

use crate::error::ConfigError;

/// Configuration for the Simulated Annealing algorithm.
///
/// Temperature follows geometric cooling, `T_{k+1} = cooling_rate * T_k`,
/// applied once per iteration.
///
/// # Examples
///
/// ```
/// use nqueens_bench::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_max_iterations(5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// The run stops once the temperature is no longer above this.
    pub min_temperature: f64,

    /// Cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Maximum total iterations (hard budget).
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 0.1,
            cooling_rate: 0.995,
            max_iterations: 20_000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written as negations so NaN is rejected too.
        if !(self.initial_temperature > 0.0) {
            return Err(ConfigError::Temperature {
                name: "initial_temperature",
                value: self.initial_temperature,
            });
        }
        if !(self.min_temperature > 0.0) {
            return Err(ConfigError::Temperature {
                name: "min_temperature",
                value: self.min_temperature,
            });
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(ConfigError::TemperatureOrder {
                min: self.min_temperature,
                initial: self.initial_temperature,
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}
