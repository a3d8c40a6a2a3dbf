//! Node type: the depot or a customer location with its demand.

use serde::{Deserialize, Serialize};

/// Identifier of a location in a problem instance.
///
/// Ids need not be contiguous or zero-based; TSPLIB instances, for example,
/// number their nodes from 1 and usually place the depot at node 1.
pub type NodeId = usize;

/// A location in a routing problem together with its demand.
///
/// The depot is an ordinary node whose demand is ignored by the solver.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::Node;
///
/// let depot = Node::depot(1, 35.0, 35.0);
/// assert_eq!(depot.id(), 1);
/// assert_eq!(depot.demand(), 0);
///
/// let c = Node::new(2, 41.0, 49.0, 10);
/// assert_eq!(c.demand(), 10);
/// assert!((depot.distance_to(&Node::new(3, 38.0, 39.0, 0)) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    x: f64,
    y: f64,
    demand: i32,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: NodeId, x: f64, y: f64, demand: i32) -> Self {
        Self { id, x, y, demand }
    }

    /// Creates a depot node (demand 0) at the given coordinates.
    pub fn depot(id: NodeId, x: f64, y: f64) -> Self {
        Self::new(id, x, y, 0)
    }

    /// Node identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Coordinates as an `(x, y)` pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Demand at this node.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        euclidean(self.coords(), other.coords())
    }
}

/// Euclidean distance between two points.
pub(crate) fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depot_has_zero_demand() {
        let d = Node::depot(1, 2.0, 3.0);
        assert_eq!(d.id(), 1);
        assert_eq!(d.demand(), 0);
        assert_eq!(d.coords(), (2.0, 3.0));
    }

    #[test]
    fn test_distance_3_4_5() {
        let a = Node::new(1, 0.0, 0.0, 0);
        let b = Node::new(2, 3.0, 4.0, 7);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Node::new(4, -7.5, 12.25, 3);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_serde_round_trip_preserves_fields() {
        let n = Node::new(9, 1.5, -2.0, 14);
        let json = serde_json::to_string(&n).expect("serialize");
        let back: Node = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(n, back);
    }
}
