//! Inter-route cross-exchange of fixed-length segments.
//!
//! # Algorithm
//!
//! For every ordered pair of distinct routes with at least `k` customers
//! each, and every pair of windows of length `k` (one per route), swap the
//! two windows wholesale while keeping the rest of each route in order:
//!
//! ```text
//! k = 2
//! R1 = [a, b, c, d]   window at 1 → [b, c]
//! R2 = [w, x, y]      window at 0 → [w, x]
//! R1' = [a, w, x, d]
//! R2' = [b, c, y]
//! ```
//!
//! Both orientations of a route pair are enumerated, as the generator
//! works on ordered pairs.
//!
//! # Complexity
//!
//! O(R² × L²) candidates.
//!
//! # Reference
//!
//! Taillard, É., Badeau, P., Gendreau, M., Guertin, F. & Potvin, J.-Y. (1997).
//! "A Tabu Search Heuristic for the Vehicle Routing Problem with Soft Time
//! Windows", *Transportation Science* 31(2), 170-186.

use crate::models::{NodeId, Solution};

/// Default window length exchanged between routes.
pub const DEFAULT_SEGMENT_LENGTH: usize = 2;

/// Generates every cross-exchange neighbor of `solution` for windows of
/// length `segment_length`.
///
/// Returns no candidates when `segment_length` is zero.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Node, ProblemInstance, Solution};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::neighborhood::cross_exchange_moves;
///
/// let mut nodes = vec![Node::depot(0, 0.0, 0.0)];
/// nodes.extend((1..=5).map(|i| Node::new(i, i as f64, 0.0, 1)));
/// let instance = ProblemInstance::from_nodes(0, 10, &nodes).unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
/// let sol = Solution::new(vec![vec![1, 2, 3], vec![4, 5]], &instance, &dm).unwrap();
///
/// let moves = cross_exchange_moves(&sol, 2);
/// assert_eq!(moves.len(), 4);
/// assert_eq!(moves[0].routes(), &[vec![4, 5, 3], vec![1, 2]]);
/// ```
pub fn cross_exchange_moves<'a>(solution: &Solution<'a>, segment_length: usize) -> Vec<Solution<'a>> {
    let routes = solution.routes();
    let k = segment_length;
    let mut neighbors = Vec::new();

    if k == 0 {
        return neighbors;
    }

    for (a, r1) in routes.iter().enumerate() {
        for (b, r2) in routes.iter().enumerate() {
            if a == b || r1.len() < k || r2.len() < k {
                continue;
            }
            for i in 0..=(r1.len() - k) {
                for j in 0..=(r2.len() - k) {
                    let mut new_routes = routes.to_vec();
                    new_routes[a] = splice(r1, i, &r2[j..j + k], k);
                    new_routes[b] = splice(r2, j, &r1[i..i + k], k);
                    neighbors.push(solution.derive(new_routes));
                }
            }
        }
    }

    neighbors
}

/// `route[..at] ++ segment ++ route[at + k..]`
fn splice(route: &[NodeId], at: usize, segment: &[NodeId], k: usize) -> Vec<NodeId> {
    let mut out = Vec::with_capacity(route.len() - k + segment.len());
    out.extend_from_slice(&route[..at]);
    out.extend_from_slice(segment);
    out.extend_from_slice(&route[at + k..]);
    out
}
