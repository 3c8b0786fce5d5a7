//! Weighted complete graph and the tour-length metric.
//!
//! Provides a dense integer cost matrix with random generation,
//! nearest-neighbor lookup, and exact tour cost evaluation.

mod matrix;

pub use matrix::{CostMatrix, DEFAULT_MAX_COST, DEFAULT_MIN_COST};
