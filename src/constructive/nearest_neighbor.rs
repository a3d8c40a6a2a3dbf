//! Nearest-neighbor constructive heuristic.
//!
//! Builds routes greedily: starting from the depot, always visit the nearest
//! unassigned customer whose demand still fits. When nothing fits, close the
//! route and start a new one from the depot.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers.

use crate::distance::{DistanceMatrix, InvalidNodeError};
use crate::models::{NodeId, ProblemInstance, Solution};

/// Constructs a CVRP solution using the nearest-neighbor heuristic.
///
/// Every customer ends up on exactly one route. Ties between equally near
/// customers go to the lower id. A customer whose demand alone exceeds the
/// capacity can never be served feasibly; each such customer is placed on
/// a route of its own after all others.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Node, ProblemInstance};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::constructive::nearest_neighbor;
///
/// let instance = ProblemInstance::from_nodes(
///     0,
///     20,
///     &[
///         Node::depot(0, 0.0, 0.0),
///         Node::new(1, 1.0, 0.0, 10),
///         Node::new(2, 2.0, 0.0, 10),
///         Node::new(3, 3.0, 0.0, 10),
///     ],
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
///
/// let solution = nearest_neighbor(&instance, &dm);
/// assert_eq!(solution.routes(), &[vec![1, 2], vec![3]]);
/// ```
pub fn nearest_neighbor<'a>(
    instance: &'a ProblemInstance,
    distances: &'a DistanceMatrix,
) -> Solution<'a> {
    // The matrix is built from the instance, so every customer id resolves.
    let routes = nearest_neighbor_routes(instance, distances)
        .expect("distance matrix covers every customer of its instance");
    Solution::from_routes(routes, instance, distances)
}

/// Route-level form of [`nearest_neighbor`].
///
/// Fails only if `distances` was built from a different instance.
pub fn nearest_neighbor_routes(
    instance: &ProblemInstance,
    distances: &DistanceMatrix,
) -> Result<Vec<Vec<NodeId>>, InvalidNodeError> {
    let depot = instance.depot();
    let capacity = instance.capacity();
    let mut unassigned: Vec<NodeId> = instance.customers().collect();

    let mut routes = Vec::new();
    let mut current: Vec<NodeId> = Vec::new();
    let mut load: i32 = 0;

    while !unassigned.is_empty() {
        let fitting: Vec<NodeId> = unassigned
            .iter()
            .copied()
            .filter(|&c| load + instance.demand(c) <= capacity)
            .collect();

        let last = current.last().copied().unwrap_or(depot);
        match distances.nearest_neighbor(last, &fitting)? {
            Some(next) => {
                current.push(next);
                load += instance.demand(next);
                unassigned.retain(|&c| c != next);
            }
            None if current.is_empty() => {
                // Nothing fits even an empty vehicle.
                tracing::warn!(
                    customers = ?unassigned,
                    capacity,
                    "customers exceed vehicle capacity on their own"
                );
                routes.extend(unassigned.drain(..).map(|c| vec![c]));
            }
            None => {
                routes.push(std::mem::take(&mut current));
                load = 0;
            }
        }
    }

    if !current.is_empty() {
        routes.push(current);
    }

    Ok(routes)
}
