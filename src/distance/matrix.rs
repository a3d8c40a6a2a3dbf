//! Dense distance matrix keyed by node id.

use std::collections::HashMap;

use super::InvalidNodeError;
use crate::models::node::euclidean;
use crate::models::{NodeId, ProblemInstance};

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Node ids are mapped to dense indices once at construction; lookups are
/// O(1). Asking for an id that is not part of the instance is an error,
/// never a silent default.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Node, ProblemInstance};
/// use cvrp_tabu::distance::DistanceMatrix;
///
/// let instance = ProblemInstance::from_nodes(
///     1,
///     100,
///     &[
///         Node::depot(1, 0.0, 0.0),
///         Node::new(2, 3.0, 4.0, 10),
///         Node::new(3, 6.0, 8.0, 20),
///     ],
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
/// assert!((dm.get(1, 2).unwrap() - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.get(1, 42).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
}

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix over every node of the instance.
    pub fn from_instance(instance: &ProblemInstance) -> Self {
        let ids: Vec<NodeId> = instance.coords().keys().copied().collect();
        let points: Vec<(f64, f64)> = instance.coords().values().copied().collect();
        let n = ids.len();

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = euclidean(points[i], points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        let index = ids.iter().enumerate().map(|(idx, &id)| (id, idx)).collect();
        Self { data, ids, index }
    }

    /// Returns the distance from node `from` to node `to`.
    pub fn get(&self, from: NodeId, to: NodeId) -> Result<f64, InvalidNodeError> {
        let i = self.slot(from)?;
        let j = self.slot(to)?;
        Ok(self.data[i * self.ids.len() + j])
    }

    fn slot(&self, id: NodeId) -> Result<usize, InvalidNodeError> {
        self.index
            .get(&id)
            .copied()
            .ok_or_else(|| InvalidNodeError::new(id))
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the matrix has a row for `id`.
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Node ids covered by this matrix, ascending.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.ids.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if (self.data[i * n + j] - self.data[j * n + i]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate that comes first. Returns `Ok(None)` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(
        &self,
        from: NodeId,
        candidates: &[NodeId],
    ) -> Result<Option<NodeId>, InvalidNodeError> {
        let mut best: Option<(NodeId, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c)?;
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        Ok(best.map(|(c, _)| c))
    }
}
