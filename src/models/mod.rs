//! Core data types shared by construction and improvement.
//!
//! - [`Tour`] — a closed visiting order over all cities
//! - [`TracePoint`] / [`RunResult`] — convergence trace and run output

mod tour;
mod trace;

pub use tour::Tour;
pub use trace::{RunResult, TracePoint};
