//! Pooled neighborhood with capacity filtering.
//!
//! All four move families are generated in a fixed order (relocate, swap,
//! 2-opt, cross-exchange) and pooled. Each candidate is then checked for
//! capacity; an infeasible one is repaired and kept only if the repaired
//! form is feasible. The output order follows the generation order, so
//! downstream selection is reproducible.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::cross_exchange::{cross_exchange_moves, DEFAULT_SEGMENT_LENGTH};
use super::{relocate_moves, swap_moves, two_opt_moves};
use crate::evaluation::{is_valid, repair};
use crate::models::Solution;

/// Generates the capacity-feasible neighborhood of a solution.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Node, ProblemInstance, Solution};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::evaluation::is_valid;
/// use cvrp_tabu::neighborhood::NeighborhoodGenerator;
///
/// let instance = ProblemInstance::from_nodes(
///     0,
///     20,
///     &[
///         Node::depot(0, 0.0, 0.0),
///         Node::new(1, 1.0, 0.0, 10),
///         Node::new(2, 2.0, 0.0, 10),
///         Node::new(3, 3.0, 0.0, 10),
///         Node::new(4, 4.0, 0.0, 10),
///     ],
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
/// let sol = Solution::new(vec![vec![1, 2], vec![3, 4]], &instance, &dm).unwrap();
///
/// let neighbors = NeighborhoodGenerator::default().generate(&sol);
/// assert!(!neighbors.is_empty());
/// assert!(neighbors.iter().all(is_valid));
/// ```
#[derive(Debug, Clone)]
pub struct NeighborhoodGenerator {
    segment_length: usize,
}

impl Default for NeighborhoodGenerator {
    fn default() -> Self {
        Self {
            segment_length: DEFAULT_SEGMENT_LENGTH,
        }
    }
}

impl NeighborhoodGenerator {
    /// Sets the window length used by cross-exchange.
    pub fn with_segment_length(mut self, len: usize) -> Self {
        self.segment_length = len;
        self
    }

    /// Window length used by cross-exchange.
    pub fn segment_length(&self) -> usize {
        self.segment_length
    }

    /// All raw candidates from the four move families, in generation order.
    pub fn candidates<'a>(&self, solution: &Solution<'a>) -> Vec<Solution<'a>> {
        let mut pool = relocate_moves(solution);
        pool.extend(swap_moves(solution));
        pool.extend(two_opt_moves(solution));
        pool.extend(cross_exchange_moves(solution, self.segment_length));
        pool
    }

    /// The capacity-feasible neighborhood, repaired where possible.
    pub fn generate<'a>(&self, solution: &Solution<'a>) -> Vec<Solution<'a>> {
        let pool = self.candidates(solution);

        #[cfg(feature = "parallel")]
        let feasible = pool.into_par_iter().filter_map(make_feasible).collect();

        #[cfg(not(feature = "parallel"))]
        let feasible = pool.into_iter().filter_map(make_feasible).collect();

        feasible
    }
}

fn make_feasible(candidate: Solution<'_>) -> Option<Solution<'_>> {
    if is_valid(&candidate) {
        return Some(candidate);
    }
    let repaired = repair(&candidate);
    is_valid(&repaired).then_some(repaired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Node, ProblemInstance};

    fn line_instance(capacity: i32) -> ProblemInstance {
        let mut nodes = vec![Node::depot(0, 0.0, 0.0)];
        nodes.extend((1..=4).map(|i| Node::new(i, i as f64, 0.0, 10)));
        ProblemInstance::from_nodes(0, capacity, &nodes).expect("valid")
    }

    #[test]
    fn test_candidate_pool_order() {
        let inst = line_instance(40);
        let dm = DistanceMatrix::from_instance(&inst);
        let sol = Solution::new(vec![vec![1, 2], vec![3, 4]], &inst, &dm).expect("valid");
        let gen = NeighborhoodGenerator::default();
        let pool = gen.candidates(&sol);

        let relocate = relocate_moves(&sol).len();
        let swap = swap_moves(&sol).len();
        let two_opt = two_opt_moves(&sol).len();
        let cross = cross_exchange_moves(&sol, 2).len();
        assert_eq!((relocate, swap, two_opt, cross), (4, 4, 2, 2));
        assert_eq!(pool.len(), relocate + swap + two_opt + cross);

        // First relocate, first swap, first 2-opt, first cross-exchange.
        assert_eq!(pool[0].routes(), &[vec![2], vec![3, 4, 1]]);
        assert_eq!(pool[4].routes(), &[vec![3, 2], vec![1, 4]]);
        assert_eq!(pool[8].routes(), &[vec![2, 1], vec![3, 4]]);
        assert_eq!(pool[10].routes(), &[vec![3, 4], vec![1, 2]]);
    }

    #[test]
    fn test_generate_repairs_overloaded_candidates() {
        let inst = line_instance(20);
        let dm = DistanceMatrix::from_instance(&inst);
        let sol = Solution::new(vec![vec![1, 2], vec![3, 4]], &inst, &dm).expect("valid");
        let neighbors = NeighborhoodGenerator::default().generate(&sol);

        // Nothing is discarded: every customer fits a vehicle on its own.
        assert_eq!(neighbors.len(), 12);
        assert!(neighbors.iter().all(is_valid));
        // The first relocate overloads route 1 and is split by repair.
        assert_eq!(neighbors[0].routes(), &[vec![2], vec![3, 4], vec![1]]);
    }

    #[test]
    fn test_generate_discards_unrepairable() {
        let inst = ProblemInstance::from_nodes(
            0,
            20,
            &[
                Node::depot(0, 0.0, 0.0),
                Node::new(1, 1.0, 0.0, 30),
                Node::new(2, 2.0, 0.0, 5),
            ],
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&inst);
        let sol = Solution::new(vec![vec![1], vec![2]], &inst, &dm).expect("valid");
        assert!(NeighborhoodGenerator::default().generate(&sol).is_empty());
    }

    #[test]
    fn test_generate_empty_solution() {
        let inst = line_instance(20);
        let dm = DistanceMatrix::from_instance(&inst);
        let sol = Solution::new(vec![], &inst, &dm).expect("valid");
        assert!(NeighborhoodGenerator::default().generate(&sol).is_empty());
    }

    #[test]
    fn test_segment_length_builder() {
        let gen = NeighborhoodGenerator::default().with_segment_length(3);
        assert_eq!(gen.segment_length(), 3);
        assert_eq!(NeighborhoodGenerator::default().segment_length(), 2);
    }
}
