//! Construction heuristics for building an initial feasible tour.
//!
//! - [`random_tour`] — uniform random permutation via rejection sampling, O(n²) expected
//! - [`iterated_random_tour`] — best of `trials + 1` independent random tours
//! - [`greedy_tour`] — nearest-neighbor chaining on a consumable working copy, O(n²)
//!
//! Every strategy returns a full permutation of the graph's cities; they
//! differ only in how much the edge costs steer the visiting order.

mod greedy;
mod iterated_random;
mod random;

pub use greedy::greedy_tour;
pub use iterated_random::iterated_random_tour;
pub use random::random_tour;
