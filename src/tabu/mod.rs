//! Tabu search over CVRP solutions.
//!
//! A single-solution trajectory metaheuristic: each iteration moves to the
//! cheapest neighbor whose full route structure was not accepted recently,
//! with periodic random diversification.

mod config;
mod engine;
mod err;
mod memory;

pub use config::{ConfigError, TabuConfig};
pub use engine::{TabuResult, TabuSearch};
pub use err::SearchError;
pub use memory::TabuMemory;
