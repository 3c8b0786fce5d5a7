//! # tsp-search
//!
//! Heuristic solver for the symmetric traveling salesman problem on
//! randomly generated complete graphs: three construction strategies
//! seed a randomized swap hill-climber with plateau acceptance and
//! stagnation-based termination.
//!
//! ## Modules
//!
//! - [`graph`] — Integer cost matrix: generation, nearest-neighbor lookup, tour cost
//! - [`models`] — Tour, convergence trace, and run result types
//! - [`constructive`] — Random, iterated-random, and greedy tour construction
//! - [`local_search`] — Swap neighborhood and hill-climbing improvement
//! - [`runner`] — Strategy dispatch, pipeline runs, batch summaries
//!
//! Every randomized entry point takes a caller-supplied [`rand::Rng`], so
//! runs are reproducible from a seed.
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tsp_search::graph::CostMatrix;
//! use tsp_search::local_search::HillClimbConfig;
//! use tsp_search::runner::{run, ConstructionStrategy};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let graph = CostMatrix::random(10, &mut rng)?;
//!
//! let config = HillClimbConfig::default().with_iteration_cap(20_000);
//! let result = run(&graph, ConstructionStrategy::Greedy, &config, &mut rng)?;
//!
//! assert!(result.tour.is_permutation_of(10));
//! assert_eq!(graph.tour_cost(&result.tour)?, result.cost);
//! # Ok::<(), tsp_search::Error>(())
//! ```

pub mod constructive;
pub mod error;
pub mod graph;
pub mod local_search;
pub mod models;
pub mod runner;

pub use error::{Error, Result};
