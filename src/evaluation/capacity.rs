//! Capacity validity check and order-preserving repair.
//!
//! # Algorithm
//!
//! Repair scans each route in its existing order, accumulating load. When
//! the next customer would push the load over capacity, the current
//! sub-route is closed and a new one starts with that customer:
//!
//! ```text
//! capacity 20, demands 10 each:  [a, b, c, d, e]  →  [a, b] [c, d] [e]
//! ```
//!
//! Customers are never reordered or dropped, so repair only ever splits
//! routes. A customer whose demand alone exceeds capacity stays on its own
//! sub-route and remains infeasible.

use crate::models::{NodeId, ProblemInstance, Solution};

/// Returns `true` if every route's total demand fits the vehicle capacity.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Node, ProblemInstance, Solution};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::evaluation::{is_valid, repair};
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
/// let overloaded = Solution::new(vec![vec![1, 2, 3]], &instance, &dm).unwrap();
/// assert!(!is_valid(&overloaded));
///
/// let repaired = repair(&overloaded);
/// assert!(is_valid(&repaired));
/// assert_eq!(repaired.routes(), &[vec![1, 2], vec![3]]);
/// ```
pub fn is_valid(solution: &Solution<'_>) -> bool {
    let instance = solution.instance();
    solution
        .routes()
        .iter()
        .all(|route| instance.route_load(route) <= instance.capacity())
}

/// Splits overloaded routes without reordering or dropping customers.
///
/// Returns a new solution; empty routes are not carried over.
pub fn repair<'a>(solution: &Solution<'a>) -> Solution<'a> {
    solution.derive(repair_routes(solution.routes(), solution.instance()))
}

/// Route-level form of [`repair`].
pub fn repair_routes(routes: &[Vec<NodeId>], instance: &ProblemInstance) -> Vec<Vec<NodeId>> {
    let capacity = instance.capacity();
    let mut repaired = Vec::with_capacity(routes.len());

    for route in routes {
        let mut current: Vec<NodeId> = Vec::new();
        let mut load = 0;
        for &node in route {
            let demand = instance.demand(node);
            if load + demand > capacity {
                if !current.is_empty() {
                    repaired.push(std::mem::take(&mut current));
                }
                load = 0;
            }
            current.push(node);
            load += demand;
        }
        if !current.is_empty() {
            repaired.push(current);
        }
    }

    repaired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::Node;
    use proptest::prelude::*;

    fn instance(demands: &[i32], capacity: i32) -> ProblemInstance {
        let mut nodes = vec![Node::depot(0, 0.0, 0.0)];
        for (i, &d) in demands.iter().enumerate() {
            nodes.push(Node::new(i + 1, (i + 1) as f64, 0.0, d));
        }
        ProblemInstance::from_nodes(0, capacity, &nodes).expect("valid")
    }

    #[test]
    fn test_is_valid() {
        let inst = instance(&[10, 10, 10], 20);
        let dm = DistanceMatrix::from_instance(&inst);
        let ok = Solution::new(vec![vec![1, 2], vec![3]], &inst, &dm).expect("valid");
        let bad = Solution::new(vec![vec![1, 2, 3]], &inst, &dm).expect("valid");
        let empty = Solution::new(vec![vec![], vec![]], &inst, &dm).expect("valid");
        assert!(is_valid(&ok));
        assert!(!is_valid(&bad));
        assert!(is_valid(&empty));
    }

    #[test]
    fn test_repair_splits_in_order() {
        let inst = instance(&[10, 10, 10, 10, 10], 20);
        let routes = repair_routes(&[vec![5, 3, 1, 2, 4]], &inst);
        assert_eq!(routes, vec![vec![5, 3], vec![1, 2], vec![4]]);
    }

    #[test]
    fn test_repair_keeps_feasible_partition() {
        let inst = instance(&[5, 7, 8], 20);
        let routes = vec![vec![2, 1], vec![3]];
        assert_eq!(repair_routes(&routes, &inst), routes);
    }

    #[test]
    fn test_repair_drops_empty_routes() {
        let inst = instance(&[5, 7], 20);
        let routes = repair_routes(&[vec![], vec![1], vec![], vec![2]], &inst);
        assert_eq!(routes, vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_repair_isolates_oversized_customer() {
        let inst = instance(&[5, 30, 5], 20);
        let dm = DistanceMatrix::from_instance(&inst);
        let sol = Solution::new(vec![vec![1, 2, 3]], &inst, &dm).expect("valid");
        let repaired = repair(&sol);
        assert_eq!(repaired.routes(), &[vec![1], vec![2], vec![3]]);
        assert!(!is_valid(&repaired));
    }

    #[test]
    fn test_repair_returns_fresh_cost() {
        let inst = instance(&[10, 10, 10], 20);
        let dm = DistanceMatrix::from_instance(&inst);
        let sol = Solution::new(vec![vec![1, 2, 3]], &inst, &dm).expect("valid");
        let _ = sol.cost();
        let repaired = repair(&sol);
        assert!(!repaired.is_cost_cached());
        // 0→1→2→0 = 4, 0→3→0 = 6
        assert!((repaired.cost() - 10.0).abs() < 1e-10);
    }

    fn demands_and_routes() -> impl Strategy<Value = (Vec<i32>, Vec<usize>, i32)> {
        (1usize..12).prop_flat_map(|n| {
            (
                prop::collection::vec(1i32..15, n),
                Just((1..=n).collect::<Vec<_>>()).prop_shuffle(),
                15i32..40,
            )
        })
    }

    proptest! {
        #[test]
        fn prop_repair_is_feasible_and_idempotent(
            (demands, order, capacity) in demands_and_routes(),
            cut in 0usize..12,
        ) {
            let inst = instance(&demands, capacity);
            let cut = cut.min(order.len());
            let routes = vec![order[..cut].to_vec(), order[cut..].to_vec()];

            let once = repair_routes(&routes, &inst);
            for r in &once {
                prop_assert!(inst.route_load(r) <= capacity);
            }
            let flat_before: Vec<usize> = routes.concat();
            let flat_after: Vec<usize> = once.concat();
            prop_assert_eq!(flat_before, flat_after);

            let twice = repair_routes(&once, &inst);
            prop_assert_eq!(once, twice);
        }
    }
}
