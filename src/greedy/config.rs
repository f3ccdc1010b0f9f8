//! Greedy search configuration.

use crate::error::ConfigError;

/// Configuration parameters for greedy hill climbing.
///
/// # Examples
///
/// ```
/// use nqueens_bench::greedy::GreedyConfig;
///
/// let config = GreedyConfig::default().with_max_restarts(100).with_seed(7);
/// assert_eq!(config.max_restarts, 100);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Maximum number of hill-climbing attempts, each from a fresh board.
    pub max_restarts: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            max_restarts: 25,
            seed: None,
        }
    }
}

impl GreedyConfig {
    /// Sets the maximum number of restarts.
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_restarts == 0 {
            return Err(ConfigError::NoRestarts);
        }
        Ok(())
    }
}
