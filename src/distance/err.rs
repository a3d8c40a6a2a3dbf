//! Distance lookup errors.

use crate::models::NodeId;

/// A distance was requested for a node id the matrix does not contain.
///
/// This always indicates a programming error upstream: every id handed to
/// the matrix should come from the instance it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNodeError {
    node: NodeId,
}

impl InvalidNodeError {
    pub fn new(node: NodeId) -> Self {
        Self { node }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}

impl std::fmt::Display for InvalidNodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} is not part of the distance matrix", self.node)
    }
}

impl std::error::Error for InvalidNodeError {}
