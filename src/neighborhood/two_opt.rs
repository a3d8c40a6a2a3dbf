//! Intra-route 2-opt segment reversal.
//!
//! # Algorithm
//!
//! For each route with at least two customers and every pair of positions
//! i < j, reverse the segment `[i..=j]`, which replaces the two edges
//! entering and leaving the segment:
//!
//! ```text
//! [a, b, c, d, e]  (i = 1, j = 3)  →  [a, d, c, b, e]
//! ```
//!
//! Other routes are left untouched.
//!
//! # Complexity
//!
//! O(R × L²) candidates.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::models::Solution;

/// Generates every 2-opt neighbor of `solution`.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Node, ProblemInstance, Solution};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::neighborhood::two_opt_moves;
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
/// let sol = Solution::new(vec![vec![1, 3, 2]], &instance, &dm).unwrap();
///
/// let moves = two_opt_moves(&sol);
/// assert_eq!(moves.len(), 3);
/// assert!(moves.iter().any(|m| m.routes() == [vec![1, 2, 3]]));
/// ```
pub fn two_opt_moves<'a>(solution: &Solution<'a>) -> Vec<Solution<'a>> {
    let routes = solution.routes();
    let mut neighbors = Vec::new();

    for (r, route) in routes.iter().enumerate() {
        if route.len() < 2 {
            continue;
        }
        for i in 0..route.len() {
            for j in (i + 1)..route.len() {
                let mut new_routes = routes.to_vec();
                new_routes[r][i..=j].reverse();
                neighbors.push(solution.derive(new_routes));
            }
        }
    }

    neighbors
}
