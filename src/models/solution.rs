//! Solution type: ordered routes with a lazily cached cost.

use std::sync::OnceLock;

use super::{NodeId, ProblemInstance, SolutionError};
use crate::distance::DistanceMatrix;

/// Canonical form of a full route list, used as a tabu-memory key.
pub type RouteSignature = Vec<Vec<NodeId>>;

/// A CVRP solution: customers partitioned into ordered routes.
///
/// The depot is implicit at the start and end of every non-empty route and
/// never stored inside one. Empty routes are allowed and cost nothing.
///
/// A solution never changes after construction. Moves build new solutions,
/// so the cached cost always matches the routes it was computed from.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Node, ProblemInstance, Solution};
/// use cvrp_tabu::distance::DistanceMatrix;
///
/// let instance = ProblemInstance::from_nodes(
///     0,
///     20,
///     &[
///         Node::depot(0, 0.0, 0.0),
///         Node::new(1, 1.0, 0.0, 10),
///         Node::new(2, 2.0, 0.0, 10),
///     ],
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
///
/// let sol = Solution::new(vec![vec![1, 2], vec![]], &instance, &dm).unwrap();
/// assert!((sol.cost() - 4.0).abs() < 1e-10);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_vehicles(), 1);
/// assert_eq!(sol.vehicle_loads(), vec![20]);
/// ```
#[derive(Debug)]
pub struct Solution<'a> {
    routes: Vec<Vec<NodeId>>,
    instance: &'a ProblemInstance,
    distances: &'a DistanceMatrix,
    cost: OnceLock<f64>,
}

impl<'a> Solution<'a> {
    /// Creates a solution after checking that every route holds only
    /// customers of `instance`.
    pub fn new(
        routes: Vec<Vec<NodeId>>,
        instance: &'a ProblemInstance,
        distances: &'a DistanceMatrix,
    ) -> Result<Self, SolutionError> {
        for (route_index, route) in routes.iter().enumerate() {
            for &node in route {
                if node == instance.depot() {
                    return Err(SolutionError::DepotInRoute { route_index });
                }
                if !instance.is_customer(node) || !distances.contains(node) {
                    return Err(SolutionError::UnknownNode { route_index, node });
                }
            }
        }
        Ok(Self::from_routes(routes, instance, distances))
    }

    /// Builds a solution from routes already known to hold only customers,
    /// e.g. a rearrangement of another solution's routes.
    pub(crate) fn from_routes(
        routes: Vec<Vec<NodeId>>,
        instance: &'a ProblemInstance,
        distances: &'a DistanceMatrix,
    ) -> Self {
        Self {
            routes,
            instance,
            distances,
            cost: OnceLock::new(),
        }
    }

    /// Builds a sibling solution sharing this one's instance and matrix.
    pub(crate) fn derive(&self, routes: Vec<Vec<NodeId>>) -> Self {
        Self::from_routes(routes, self.instance, self.distances)
    }

    /// Total travel distance, computed on first call and cached.
    ///
    /// # Panics
    ///
    /// Panics if a route holds a node missing from the distance matrix,
    /// which [`Solution::new`] rules out.
    pub fn cost(&self) -> f64 {
        *self.cost.get_or_init(|| self.compute_cost())
    }

    /// Returns `true` once [`Solution::cost`] has been evaluated.
    pub fn is_cost_cached(&self) -> bool {
        self.cost.get().is_some()
    }

    fn compute_cost(&self) -> f64 {
        let depot = self.instance.depot();
        let d = |a: NodeId, b: NodeId| {
            self.distances
                .get(a, b)
                .expect("solution routes only hold nodes of the distance matrix")
        };

        let mut total = 0.0;
        for route in self.routes.iter().filter(|r| !r.is_empty()) {
            let mut prev = depot;
            for &node in route {
                total += d(prev, node);
                prev = node;
            }
            total += d(prev, depot);
        }
        total
    }

    /// Independent copy with deep-copied routes and an uncomputed cost cache.
    pub fn copy(&self) -> Self {
        self.derive(self.routes.clone())
    }

    /// The routes, in order.
    pub fn routes(&self) -> &[Vec<NodeId>] {
        &self.routes
    }

    /// Consumes the solution, returning its routes.
    pub fn into_routes(self) -> Vec<Vec<NodeId>> {
        self.routes
    }

    /// The instance this solution belongs to.
    pub fn instance(&self) -> &'a ProblemInstance {
        self.instance
    }

    /// The distance matrix used for costing.
    pub fn distances(&self) -> &'a DistanceMatrix {
        self.distances
    }

    /// Number of routes, empty ones included.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of vehicles used (non-empty routes).
    pub fn num_vehicles(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Total demand on the route at `idx`, or `None` if there is no such route.
    pub fn route_load(&self, idx: usize) -> Option<i32> {
        self.routes.get(idx).map(|r| self.instance.route_load(r))
    }

    /// Load of each vehicle, one entry per non-empty route.
    pub fn vehicle_loads(&self) -> Vec<i32> {
        self.routes
            .iter()
            .filter(|r| !r.is_empty())
            .map(|r| self.instance.route_load(r))
            .collect()
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Vec::len).sum()
    }

    /// Canonical key of this solution's full route structure.
    pub fn signature(&self) -> RouteSignature {
        self.routes.clone()
    }
}

impl Clone for Solution<'_> {
    /// Same as [`Solution::copy`]: the cost cache is not carried over.
    fn clone(&self) -> Self {
        self.copy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;
    use proptest::prelude::*;

    fn line_instance() -> ProblemInstance {
        ProblemInstance::from_nodes(
            0,
            20,
            &[
                Node::depot(0, 0.0, 0.0),
                Node::new(1, 1.0, 0.0, 10),
                Node::new(2, 2.0, 0.0, 10),
                Node::new(3, 3.0, 0.0, 10),
                Node::new(4, 4.0, 0.0, 10),
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_cost_of_routes() {
        let inst = line_instance();
        let dm = DistanceMatrix::from_instance(&inst);
        let sol = Solution::new(vec![vec![1, 2], vec![3, 4]], &inst, &dm).expect("valid");
        // 0→1→2→0 = 4, 0→3→4→0 = 8
        assert!((sol.cost() - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_routes_cost_nothing() {
        let inst = line_instance();
        let dm = DistanceMatrix::from_instance(&inst);
        let sol = Solution::new(vec![vec![], vec![2], vec![]], &inst, &dm).expect("valid");
        assert!((sol.cost() - 4.0).abs() < 1e-10);
        assert_eq!(sol.num_routes(), 3);
        assert_eq!(sol.num_vehicles(), 1);

        let none = Solution::new(vec![], &inst, &dm).expect("valid");
        assert_eq!(none.cost(), 0.0);
    }

    #[test]
    fn test_cost_is_cached_lazily() {
        let inst = line_instance();
        let dm = DistanceMatrix::from_instance(&inst);
        let sol = Solution::new(vec![vec![1]], &inst, &dm).expect("valid");
        assert!(!sol.is_cost_cached());
        let c = sol.cost();
        assert!(sol.is_cost_cached());
        assert_eq!(sol.cost(), c);
    }

    #[test]
    fn test_copy_resets_cache_and_is_independent() {
        let inst = line_instance();
        let dm = DistanceMatrix::from_instance(&inst);
        let sol = Solution::new(vec![vec![1, 2], vec![3]], &inst, &dm).expect("valid");
        let cost = sol.cost();

        let copy = sol.copy();
        assert!(!copy.is_cost_cached());
        assert_eq!(copy.cost(), cost);
        assert_eq!(copy.routes(), sol.routes());

        let mut routes = copy.into_routes();
        routes[0].push(4);
        assert_eq!(sol.routes()[0], vec![1, 2]);

        let cloned = sol.clone();
        assert!(!cloned.is_cost_cached());
    }

    #[test]
    fn test_loads() {
        let inst = line_instance();
        let dm = DistanceMatrix::from_instance(&inst);
        let sol = Solution::new(vec![vec![1, 2, 3], vec![], vec![4]], &inst, &dm).expect("valid");
        assert_eq!(sol.route_load(0), Some(30));
        assert_eq!(sol.route_load(1), Some(0));
        assert_eq!(sol.route_load(2), Some(10));
        assert_eq!(sol.route_load(3), None);
        assert_eq!(sol.vehicle_loads(), vec![30, 10]);
        assert_eq!(sol.num_served(), 4);
    }

    #[test]
    fn test_rejects_depot_in_route() {
        let inst = line_instance();
        let dm = DistanceMatrix::from_instance(&inst);
        let err = Solution::new(vec![vec![1], vec![2, 0]], &inst, &dm).unwrap_err();
        assert_eq!(err, SolutionError::DepotInRoute { route_index: 1 });
    }

    #[test]
    fn test_rejects_unknown_node() {
        let inst = line_instance();
        let dm = DistanceMatrix::from_instance(&inst);
        let err = Solution::new(vec![vec![1, 9]], &inst, &dm).unwrap_err();
        assert_eq!(
            err,
            SolutionError::UnknownNode {
                route_index: 0,
                node: 9
            }
        );
    }

    #[test]
    fn test_signature_reflects_route_order() {
        let inst = line_instance();
        let dm = DistanceMatrix::from_instance(&inst);
        let a = Solution::new(vec![vec![1, 2]], &inst, &dm).expect("valid");
        let b = Solution::new(vec![vec![2, 1]], &inst, &dm).expect("valid");
        assert_ne!(a.signature(), b.signature());
        assert_eq!(a.signature(), a.copy().signature());
    }

    proptest! {
        #[test]
        fn prop_copy_preserves_cost(split in 0usize..=4, rev in any::<bool>()) {
            let inst = line_instance();
            let dm = DistanceMatrix::from_instance(&inst);
            let mut all = vec![1, 2, 3, 4];
            if rev {
                all.reverse();
            }
            let second = all.split_off(split);
            let sol = Solution::new(vec![all, second], &inst, &dm).unwrap();
            prop_assert_eq!(sol.copy().cost(), sol.cost());
        }
    }
}
