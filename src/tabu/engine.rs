//! Tabu search execution engine.
//!
//! # Algorithm
//!
//! 1. Build the greedy nearest-neighbor solution; `best = current = initial`
//! 2. For each iteration `t` in `0..max_iter`:
//!    a. Every `diversification_freq` iterations (starting at `t = 0`),
//!       perturb `current` with a few random relocations
//!    b. Generate the capacity-feasible neighborhood of `current`
//!    c. Sort candidates by cost (stable, so ties keep generation order) and
//!       take the first whose route structure is not in tabu memory
//!    d. Move to that candidate even if it is worse, and make it tabu
//!    e. Replace the best solution on strict improvement
//! 3. Return the best solution after exactly `max_iter` iterations
//!
//! An empty neighborhood or an all-tabu neighborhood leaves the state
//! unchanged for that iteration. There is no aspiration criterion: a tabu
//! candidate is skipped even when it would improve on the best.
//!
//! Diversification does not repair capacity, so `current` may be
//! temporarily overloaded until the next accepted move.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Gendreau, M., Hertz, A. & Laporte, G. (1994). "A Tabu Search Heuristic for
//! the Vehicle Routing Problem", *Management Science* 40(10), 1276-1290.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::TabuConfig;
use super::err::SearchError;
use super::memory::TabuMemory;
use crate::constructive::nearest_neighbor;
use crate::distance::{DistanceMatrix, InvalidNodeError};
use crate::models::{ProblemInstance, Solution};
use crate::neighborhood::NeighborhoodGenerator;

/// Result of a tabu search run.
#[derive(Debug, Clone)]
pub struct TabuResult<'a> {
    /// Best solution found.
    pub best: Solution<'a>,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Iterations executed (less than `max_iter` only when stopped externally).
    pub iterations: usize,
    /// Iteration at which the best solution was found; `None` if the initial
    /// solution was never beaten.
    pub best_iteration: Option<usize>,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
    /// Number of diversifications applied.
    pub diversifications: usize,
}

/// Tabu search engine for one problem instance.
///
/// The engine owns its random generator. With a fixed seed, two runs on
/// the same instance produce identical results.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Node, ProblemInstance};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::tabu::{TabuConfig, TabuSearch};
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
/// let config = TabuConfig::default()
///     .with_max_iter(50)
///     .with_tabu_tenure(3)
///     .with_seed(42);
///
/// let mut search = TabuSearch::new(&instance, &dm, config).unwrap();
/// let best = search.solve();
/// assert!((best.cost() - 12.0).abs() < 1e-10);
/// assert_eq!(best.num_vehicles(), 2);
/// ```
pub struct TabuSearch<'a> {
    instance: &'a ProblemInstance,
    distances: &'a DistanceMatrix,
    config: TabuConfig,
    neighborhood: NeighborhoodGenerator,
    rng: StdRng,
}

impl<'a> TabuSearch<'a> {
    /// Creates an engine.
    ///
    /// Fails on an unusable configuration, or when `distances` lacks a node
    /// of `instance` (for example, a matrix built from another instance).
    pub fn new(
        instance: &'a ProblemInstance,
        distances: &'a DistanceMatrix,
        config: TabuConfig,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        if let Some(&node) = instance.coords().keys().find(|&&id| !distances.contains(id)) {
            return Err(InvalidNodeError::new(node).into());
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            instance,
            distances,
            config,
            neighborhood: NeighborhoodGenerator::default(),
            rng,
        })
    }

    /// Replaces the neighborhood generator.
    pub fn with_neighborhood(mut self, neighborhood: NeighborhoodGenerator) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Runs the search and returns the best solution found.
    pub fn solve(&mut self) -> Solution<'a> {
        self.run().best
    }

    /// Runs the search for `max_iter` iterations.
    pub fn run(&mut self) -> TabuResult<'a> {
        self.run_until(&AtomicBool::new(false))
    }

    /// Runs the search, checking `stop` before every iteration.
    ///
    /// Setting `stop` ends the run early with the best solution so far.
    #[tracing::instrument(
        level = "debug",
        name = "Tabu Search",
        skip(self, stop),
        fields(
            instance = self.instance.name(),
            max_iter = self.config.max_iter,
            tenure = self.config.tabu_tenure
        )
    )]
    pub fn run_until(&mut self, stop: &AtomicBool) -> TabuResult<'a> {
        let mut current = nearest_neighbor(self.instance, self.distances);
        let mut best = current.copy();
        let mut best_iteration = None;
        let mut tabu = TabuMemory::new(self.config.tabu_tenure);

        let mut cost_history = Vec::with_capacity(self.config.max_iter);
        let mut diversifications = 0;

        tracing::debug!(
            routes = current.num_routes(),
            cost = current.cost(),
            "initial solution built"
        );

        for t in 0..self.config.max_iter {
            if stop.load(Ordering::Relaxed) {
                tracing::debug!(iteration = t, "stop requested");
                break;
            }

            if t % self.config.diversification_freq == 0 {
                current = self.diversify(&current);
                diversifications += 1;
                tracing::debug!(iteration = t, cost = current.cost(), "diversified");
            }

            if self.step(&mut current, &mut tabu) {
                if current.cost() < best.cost() {
                    best = current.copy();
                    best_iteration = Some(t);
                    tracing::debug!(iteration = t, cost = best.cost(), "new best");
                }
            } else {
                tracing::trace!(iteration = t, "no admissible neighbor");
            }

            cost_history.push(best.cost());
        }

        let best_cost = best.cost();
        tracing::info!(
            best_cost,
            vehicles = best.num_vehicles(),
            iterations = cost_history.len(),
            "tabu search finished"
        );

        TabuResult {
            best,
            best_cost,
            iterations: cost_history.len(),
            best_iteration,
            cost_history,
            diversifications,
        }
    }

    /// Moves `current` to its best admissible neighbor and makes that
    /// neighbor tabu. Returns `false`, leaving both untouched, when there is
    /// no admissible neighbor.
    fn step(&self, current: &mut Solution<'a>, tabu: &mut TabuMemory) -> bool {
        match self.select(current, tabu) {
            Some(candidate) => {
                tabu.insert(candidate.signature());
                *current = candidate;
                true
            }
            None => false,
        }
    }

    /// Picks the cheapest non-tabu neighbor of `current`.
    fn select(&self, current: &Solution<'a>, tabu: &TabuMemory) -> Option<Solution<'a>> {
        let mut neighbors = self.neighborhood.generate(current);
        if neighbors.is_empty() {
            return None;
        }

        #[cfg(feature = "parallel")]
        neighbors.par_iter().for_each(|n| {
            n.cost();
        });

        neighbors.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
        neighbors
            .into_iter()
            .find(|candidate| !tabu.contains(candidate.routes()))
    }

    /// Moves a few random customers to the end of other random routes.
    ///
    /// Each attempt draws a source and a destination route; it does nothing
    /// if they coincide or the source is empty. The result is not repaired.
    pub fn diversify(&mut self, solution: &Solution<'a>) -> Solution<'a> {
        let mut routes = solution.routes().to_vec();

        for _ in 0..self.config.diversification_moves {
            if routes.len() < 2 {
                break;
            }
            let from = self.rng.random_range(0..routes.len());
            let to = self.rng.random_range(0..routes.len());
            if from == to || routes[from].is_empty() {
                continue;
            }
            let pos = self.rng.random_range(0..routes[from].len());
            let node = routes[from].remove(pos);
            routes[to].push(node);
        }

        solution.derive(routes)
    }
}
