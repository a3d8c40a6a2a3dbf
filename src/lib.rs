//! # cvrp-tabu
//!
//! Capacitated vehicle routing via tabu search.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, ProblemInstance, Solution)
//! - [`distance`] — Euclidean distance matrix keyed by node id
//! - [`evaluation`] — Capacity feasibility check and order-preserving repair
//! - [`constructive`] — Greedy nearest-neighbor construction
//! - [`neighborhood`] — Relocate, swap, 2-opt and cross-exchange moves
//! - [`tabu`] — Tabu search engine with diversification and bounded memory
//! - [`report`] — Benchmark summary of a solved instance
//!
//! ## Example
//!
//! ```
//! use cvrp_tabu::models::{Node, ProblemInstance};
//! use cvrp_tabu::distance::DistanceMatrix;
//! use cvrp_tabu::tabu::{TabuConfig, TabuSearch};
//!
//! let instance = ProblemInstance::from_nodes(
//!     1,
//!     30,
//!     &[
//!         Node::depot(1, 0.0, 0.0),
//!         Node::new(2, 5.0, 0.0, 10),
//!         Node::new(3, 0.0, 5.0, 10),
//!         Node::new(4, -5.0, 0.0, 10),
//!         Node::new(5, 0.0, -5.0, 10),
//!     ],
//! )
//! .unwrap();
//! let dm = DistanceMatrix::from_instance(&instance);
//!
//! let mut search = TabuSearch::new(&instance, &dm, TabuConfig::default().with_max_iter(20).with_seed(1)).unwrap();
//! let best = search.solve();
//! assert_eq!(best.num_served(), 4);
//! assert!(best.vehicle_loads().iter().all(|&load| load <= 30));
//! ```

pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod models;
pub mod neighborhood;
pub mod report;
pub mod tabu;
