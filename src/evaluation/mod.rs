//! Capacity feasibility checking and repair.

mod capacity;

pub use capacity::{is_valid, repair, repair_routes};
