//! Inter-route customer swap.
//!
//! For every unordered pair of non-empty routes (i < j) and every pair of
//! positions (p in route i, q in route j), exchange the two customers in
//! place. Produces O(R² × L²) candidates.

use crate::models::Solution;

/// Generates every swap neighbor of `solution`, unvalidated.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Node, ProblemInstance, Solution};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::neighborhood::swap_moves;
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
/// let moves = swap_moves(&sol);
/// assert_eq!(moves.len(), 2);
/// assert_eq!(moves[1].routes(), &[vec![1, 3], vec![2]]);
/// ```
pub fn swap_moves<'a>(solution: &Solution<'a>) -> Vec<Solution<'a>> {
    let routes = solution.routes();
    let mut neighbors = Vec::new();

    for i in 0..routes.len() {
        for j in (i + 1)..routes.len() {
            if routes[i].is_empty() || routes[j].is_empty() {
                continue;
            }
            for p in 0..routes[i].len() {
                for q in 0..routes[j].len() {
                    let mut new_routes = routes.to_vec();
                    new_routes[i][p] = routes[j][q];
                    new_routes[j][q] = routes[i][p];
                    neighbors.push(solution.derive(new_routes));
                }
            }
        }
    }

    neighbors
}
