//! Convergence trace and run output.

use serde::{Deserialize, Serialize};

use super::Tour;

/// One entry of a hill-climbing convergence trace: the best cost known when
/// entering iteration `iteration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracePoint {
    pub iteration: usize,
    pub cost: u64,
}

/// Output of one construction + improvement pipeline execution.
///
/// The trace holds one point per improvement iteration; its cost component
/// is non-increasing, so the first entry is the cost of the unimproved
/// starting tour and the last equals `cost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// The tour held when the search terminated.
    pub tour: Tour,

    /// Cost of `tour`.
    pub cost: u64,

    /// Best-cost-so-far recorded at the start of every iteration.
    pub trace: Vec<TracePoint>,
}

impl RunResult {
    /// Cost of the starting tour, before any improvement.
    ///
    /// `None` only for an empty trace, which a zero-length improvement run
    /// never produces.
    pub fn initial_cost(&self) -> Option<u64> {
        self.trace.first().map(|point| point.cost)
    }
}
