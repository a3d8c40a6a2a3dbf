//! Domain model types for capacitated vehicle routing.
//!
//! Provides nodes, the immutable problem instance, and solutions as ordered
//! route lists with a lazily cached cost.

mod err;
pub(crate) mod node;
mod problem;
mod solution;

pub use err::{InstanceError, SolutionError};
pub use node::{Node, NodeId};
pub use problem::ProblemInstance;
pub use solution::{RouteSignature, Solution};
