//! Bounded FIFO tabu memory keyed by whole-solution signatures.

use std::collections::{HashMap, VecDeque};

use crate::models::{NodeId, RouteSignature};

/// Short-term memory of recently accepted solutions.
///
/// Holds at most `tenure` signatures; inserting into a full memory evicts
/// the oldest one. Insert, membership and eviction are all O(1) in the
/// number of stored signatures.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::tabu::TabuMemory;
///
/// let mut memory = TabuMemory::new(2);
/// memory.insert(vec![vec![1, 2]]);
/// memory.insert(vec![vec![2, 1]]);
/// assert!(memory.contains(&[vec![1, 2]]));
///
/// memory.insert(vec![vec![1], vec![2]]);
/// assert!(!memory.contains(&[vec![1, 2]]));
/// assert_eq!(memory.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory {
    tenure: usize,
    queue: VecDeque<RouteSignature>,
    counts: HashMap<RouteSignature, usize>,
}

impl TabuMemory {
    /// Creates an empty memory holding at most `tenure` signatures.
    pub fn new(tenure: usize) -> Self {
        Self {
            tenure,
            queue: VecDeque::with_capacity(tenure),
            counts: HashMap::with_capacity(tenure),
        }
    }

    /// Records a signature, evicting the oldest one when full.
    ///
    /// With a tenure of zero nothing is ever remembered.
    pub fn insert(&mut self, signature: RouteSignature) {
        if self.tenure == 0 {
            return;
        }
        if self.queue.len() == self.tenure {
            self.evict_oldest();
        }
        *self.counts.entry(signature.clone()).or_insert(0) += 1;
        self.queue.push_back(signature);
    }

    fn evict_oldest(&mut self) {
        if let Some(old) = self.queue.pop_front() {
            if let Some(count) = self.counts.get_mut(&old) {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&old);
                }
            }
        }
    }

    /// Returns `true` if a solution with exactly these routes is forbidden.
    pub fn contains(&self, routes: &[Vec<NodeId>]) -> bool {
        self.counts.contains_key(routes)
    }

    /// Maximum number of stored signatures.
    pub fn tenure(&self) -> usize {
        self.tenure
    }

    /// Number of stored signatures.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if nothing is forbidden.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Forgets every signature.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.counts.clear();
    }
}
