//! Errors raised while building instances and solutions.

use super::NodeId;

/// A problem instance violates one of its construction invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum InstanceError {
    /// The depot has no coordinates.
    MissingDepot {
        /// Depot id that was requested.
        depot: NodeId,
    },
    /// A demand was given for a node without coordinates.
    UnknownDemandNode {
        /// Offending node id.
        node: NodeId,
    },
    /// A coordinate is NaN or infinite.
    NonFiniteCoordinate {
        /// Offending node id.
        node: NodeId,
    },
    /// The same node id was supplied twice.
    DuplicateNode {
        /// Offending node id.
        node: NodeId,
    },
    /// A node was given a negative demand.
    NegativeDemand {
        /// Offending node id.
        node: NodeId,
        /// Demand that was supplied.
        demand: i32,
    },
    /// Vehicle capacity must be positive.
    NonPositiveCapacity {
        /// Capacity that was supplied.
        capacity: i32,
    },
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceError::MissingDepot { depot } => {
                write!(f, "Depot {} has no coordinates", depot)
            }
            InstanceError::UnknownDemandNode { node } => {
                write!(f, "Demand given for node {} which has no coordinates", node)
            }
            InstanceError::NonFiniteCoordinate { node } => {
                write!(f, "Node {} has a non-finite coordinate", node)
            }
            InstanceError::DuplicateNode { node } => {
                write!(f, "Node {} was supplied more than once", node)
            }
            InstanceError::NegativeDemand { node, demand } => {
                write!(f, "Node {} has negative demand {}", node, demand)
            }
            InstanceError::NonPositiveCapacity { capacity } => {
                write!(f, "Vehicle capacity must be positive, got {}", capacity)
            }
        }
    }
}

impl std::error::Error for InstanceError {}

/// A route list cannot be turned into a solution for the given instance.
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionError {
    /// A route references a node the instance does not define.
    UnknownNode {
        /// Route index.
        route_index: usize,
        /// Offending node id.
        node: NodeId,
    },
    /// The depot was stored inside a route; it is implicit at both ends.
    DepotInRoute {
        /// Route index.
        route_index: usize,
    },
}

impl std::fmt::Display for SolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionError::UnknownNode { route_index, node } => {
                write!(f, "Route {} visits unknown node {}", route_index, node)
            }
            SolutionError::DepotInRoute { route_index } => {
                write!(f, "Route {} stores the depot explicitly", route_index)
            }
        }
    }
}

impl std::error::Error for SolutionError {}
