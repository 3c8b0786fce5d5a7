//! Local search for improving a constructed tour.
//!
//! - [`random_swap`] — two-position exchange neighborhood
//! - [`improve`] — randomized hill-climbing with plateau acceptance

mod hill_climb;
mod swap;

pub use hill_climb::{improve, HillClimbConfig, DEFAULT_ITERATION_CAP, DEFAULT_STAGNATION_LIMIT};
pub use swap::random_swap;
