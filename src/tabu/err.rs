//! Errors raised while setting up a search.

use super::config::ConfigError;
use crate::distance::InvalidNodeError;

/// A [`TabuSearch`](super::TabuSearch) cannot be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The configuration is unusable.
    Config(ConfigError),
    /// The distance matrix does not cover every node of the instance.
    Distance(InvalidNodeError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::Config(e) => write!(f, "Invalid configuration: {}", e),
            SearchError::Distance(e) => write!(f, "Distance matrix mismatch: {}", e),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Config(e) => Some(e),
            SearchError::Distance(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        SearchError::Config(e)
    }
}

impl From<InvalidNodeError> for SearchError {
    fn from(e: InvalidNodeError) -> Self {
        SearchError::Distance(e)
    }
}
