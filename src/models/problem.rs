//! Capacitated routing problem instance.

use std::collections::BTreeMap;

use super::{InstanceError, Node, NodeId};

/// An immutable CVRP instance: depot, vehicle capacity, node coordinates and
/// node demands.
///
/// Nodes are kept in ordered maps, so every iteration over them runs in
/// ascending id order. Customers are the nodes with a demand entry other
/// than the depot.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Node, ProblemInstance};
///
/// let instance = ProblemInstance::from_nodes(
///     1,
///     20,
///     &[
///         Node::depot(1, 0.0, 0.0),
///         Node::new(2, 1.0, 0.0, 10),
///         Node::new(3, 2.0, 0.0, 10),
///     ],
/// )
/// .unwrap();
/// assert_eq!(instance.depot(), 1);
/// assert_eq!(instance.customers().collect::<Vec<_>>(), vec![2, 3]);
/// assert_eq!(instance.route_load(&[2, 3]), 20);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    name: String,
    depot: NodeId,
    capacity: i32,
    coords: BTreeMap<NodeId, (f64, f64)>,
    demands: BTreeMap<NodeId, i32>,
}

impl ProblemInstance {
    /// Creates an instance from coordinate and demand maps.
    ///
    /// Fails if the depot has no coordinates, a demand refers to a node
    /// without coordinates or is negative, a coordinate is not finite, or
    /// the capacity is not positive.
    pub fn new(
        depot: NodeId,
        capacity: i32,
        coords: BTreeMap<NodeId, (f64, f64)>,
        demands: BTreeMap<NodeId, i32>,
    ) -> Result<Self, InstanceError> {
        if capacity <= 0 {
            return Err(InstanceError::NonPositiveCapacity { capacity });
        }
        if !coords.contains_key(&depot) {
            return Err(InstanceError::MissingDepot { depot });
        }
        if let Some((&node, _)) = coords
            .iter()
            .find(|(_, (x, y))| !x.is_finite() || !y.is_finite())
        {
            return Err(InstanceError::NonFiniteCoordinate { node });
        }
        if let Some(&node) = demands.keys().find(|id| !coords.contains_key(*id)) {
            return Err(InstanceError::UnknownDemandNode { node });
        }
        if let Some((&node, &demand)) = demands.iter().find(|(_, d)| **d < 0) {
            return Err(InstanceError::NegativeDemand { node, demand });
        }
        Ok(Self {
            name: String::new(),
            depot,
            capacity,
            coords,
            demands,
        })
    }

    /// Creates an instance from a list of nodes (the depot included).
    pub fn from_nodes(depot: NodeId, capacity: i32, nodes: &[Node]) -> Result<Self, InstanceError> {
        let mut coords = BTreeMap::new();
        let mut demands = BTreeMap::new();
        for node in nodes {
            if coords.insert(node.id(), node.coords()).is_some() {
                return Err(InstanceError::DuplicateNode { node: node.id() });
            }
            demands.insert(node.id(), node.demand());
        }
        Self::new(depot, capacity, coords, demands)
    }

    /// Sets the instance name (e.g. `"P-n16-k8"`).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Instance name; empty if never set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Depot node id.
    pub fn depot(&self) -> NodeId {
        self.depot
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Number of nodes with coordinates, depot included.
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Node coordinates keyed by id.
    pub fn coords(&self) -> &BTreeMap<NodeId, (f64, f64)> {
        &self.coords
    }

    /// Node demands keyed by id.
    pub fn demands(&self) -> &BTreeMap<NodeId, i32> {
        &self.demands
    }

    /// Coordinates of a single node.
    pub fn coord(&self, id: NodeId) -> Option<(f64, f64)> {
        self.coords.get(&id).copied()
    }

    /// Demand of a node; zero for the depot or for nodes without a demand entry.
    pub fn demand(&self, id: NodeId) -> i32 {
        if id == self.depot {
            return 0;
        }
        self.demands.get(&id).copied().unwrap_or(0)
    }

    /// Returns `true` if `id` is a customer (has a demand entry and is not the depot).
    pub fn is_customer(&self, id: NodeId) -> bool {
        id != self.depot && self.demands.contains_key(&id)
    }

    /// Customer ids in ascending order.
    pub fn customers(&self) -> impl Iterator<Item = NodeId> + '_ {
        let depot = self.depot;
        self.demands.keys().copied().filter(move |&id| id != depot)
    }

    /// Number of customers.
    pub fn num_customers(&self) -> usize {
        self.customers().count()
    }

    /// Total demand over the given route.
    ///
    /// Saturates at `i32::MAX`; demands are never negative, so a saturated
    /// load still compares as over capacity.
    pub fn route_load(&self, route: &[NodeId]) -> i32 {
        route
            .iter()
            .fold(0i32, |load, &id| load.saturating_add(self.demand(id)))
    }

    /// Total demand over all customers, saturating at `i32::MAX`.
    pub fn total_demand(&self) -> i32 {
        self.customers()
            .fold(0i32, |total, id| total.saturating_add(self.demand(id)))
    }
}
