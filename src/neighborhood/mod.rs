//! Neighborhood operators for tabu search over CVRP solutions.
//!
//! - [`relocate_moves`] — Move one customer to the end of another route
//! - [`swap_moves`] — Exchange two customers between routes
//! - [`two_opt_moves`] — Reverse a segment within a route
//! - [`cross_exchange_moves`] — Exchange fixed-length segments between routes
//! - [`NeighborhoodGenerator`] — Pools all four and filters for capacity

mod cross_exchange;
mod generator;
mod relocate;
mod swap;
mod two_opt;

pub use cross_exchange::{cross_exchange_moves, DEFAULT_SEGMENT_LENGTH};
pub use generator::NeighborhoodGenerator;
pub use relocate::relocate_moves;
pub use swap::swap_moves;
pub use two_opt::two_opt_moves;
