//! Tabu search configuration.

use serde::{Deserialize, Serialize};

/// Configuration parameters for the tabu search engine.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iter(1500)
///     .with_tabu_tenure(10)
///     .with_diversification_freq(500)
///     .with_seed(7);
/// assert_eq!(config.max_iter, 1500);
/// assert_eq!(config.tabu_tenure, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabuConfig {
    /// Number of iterations; the search always runs to this cutoff.
    pub max_iter: usize,
    /// Number of most recently accepted solutions kept forbidden.
    pub tabu_tenure: usize,
    /// Iterations between forced diversifications (applied at iteration 0 too).
    pub diversification_freq: usize,
    /// Random relocation attempts per diversification.
    pub diversification_moves: usize,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tabu_tenure: 7,
            diversification_freq: 50,
            diversification_moves: 3,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the iteration cutoff.
    pub fn with_max_iter(mut self, n: usize) -> Self {
        self.max_iter = n;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the number of iterations between diversifications.
    pub fn with_diversification_freq(mut self, freq: usize) -> Self {
        self.diversification_freq = freq;
        self
    }

    /// Sets the number of random relocation attempts per diversification.
    pub fn with_diversification_moves(mut self, moves: usize) -> Self {
        self.diversification_moves = moves;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the configuration can drive a search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.diversification_freq == 0 {
            return Err(ConfigError::ZeroDiversificationFreq);
        }
        Ok(())
    }
}

/// An unusable tabu search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `diversification_freq` must be at least 1.
    ZeroDiversificationFreq,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroDiversificationFreq => {
                write!(f, "diversification_freq must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iter, 1000);
        assert_eq!(config.tabu_tenure, 7);
        assert_eq!(config.diversification_freq, 50);
        assert_eq!(config.diversification_moves, 3);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = TabuConfig::default()
            .with_max_iter(50)
            .with_tabu_tenure(3)
            .with_diversification_freq(10)
            .with_diversification_moves(5)
            .with_seed(123);
        assert_eq!(config.max_iter, 50);
        assert_eq!(config.tabu_tenure, 3);
        assert_eq!(config.diversification_freq, 10);
        assert_eq!(config.diversification_moves, 5);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_zero_diversification_freq_rejected() {
        let config = TabuConfig::default().with_diversification_freq(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDiversificationFreq));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: TabuConfig =
            serde_json::from_str(r#"{"max_iter": 1500, "tabu_tenure": 10}"#).expect("valid json");
        assert_eq!(config.max_iter, 1500);
        assert_eq!(config.tabu_tenure, 10);
        assert_eq!(config.diversification_freq, 50);
    }
}
