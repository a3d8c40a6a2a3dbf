//! Inter-route customer relocation.
//!
//! # Algorithm
//!
//! For every ordered pair of distinct routes (i, j) with route i non-empty,
//! and every position p in route i, remove the customer at p and append it
//! to the end of route j:
//!
//! ```text
//! R_i = [a, b, c], R_j = [x, y]   (p = 1)
//! R_i' = [a, c],   R_j' = [x, y, b]
//! ```
//!
//! # Complexity
//!
//! O(R² × L) candidates, where R = number of routes and L = average route length.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use crate::models::Solution;

/// Generates every relocate neighbor of `solution`, unvalidated.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Node, ProblemInstance, Solution};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::neighborhood::relocate_moves;
///
/// let instance = ProblemInstance::from_nodes(
///     0,
///     30,
///     &[
///         Node::depot(0, 0.0, 0.0),
///         Node::new(1, 1.0, 0.0, 10),
///         Node::new(2, 2.0, 0.0, 10),
///         Node::new(3, 3.0, 0.0, 10),
///     ],
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
/// let sol = Solution::new(vec![vec![1, 2], vec![3]], &instance, &dm).unwrap();
///
/// let moves = relocate_moves(&sol);
/// assert_eq!(moves.len(), 3);
/// assert_eq!(moves[0].routes(), &[vec![2], vec![3, 1]]);
/// ```
pub fn relocate_moves<'a>(solution: &Solution<'a>) -> Vec<Solution<'a>> {
    let routes = solution.routes();
    let mut neighbors = Vec::new();

    for (i, source) in routes.iter().enumerate() {
        if source.is_empty() {
            continue;
        }
        for j in 0..routes.len() {
            if i == j {
                continue;
            }
            for pos in 0..source.len() {
                let mut new_routes = routes.to_vec();
                let node = new_routes[i].remove(pos);
                new_routes[j].push(node);
                neighbors.push(solution.derive(new_routes));
            }
        }
    }

    neighbors
}
