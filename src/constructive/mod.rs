//! Constructive heuristics for building initial CVRP solutions.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor insertion, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_routes};
