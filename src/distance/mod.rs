//! Distance matrices.
//!
//! Provides a dense Euclidean distance matrix keyed by node id.

mod err;
mod matrix;

pub use err::InvalidNodeError;
pub use matrix::DistanceMatrix;
