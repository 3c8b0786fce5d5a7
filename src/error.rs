//! Crate error type.

use thiserror::Error as ThisError;

/// Errors reported by the core search API.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A caller-supplied argument is out of range or malformed
    /// (non-positive city count, bad cost range, tour that is not a
    /// permutation of the graph's cities).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Greedy construction found no strictly positive edge out of a city.
    /// Cannot occur on a correctly generated complete graph with N ≥ 2.
    #[error("no positive-cost neighbor reachable from city {0}")]
    NoNeighborAvailable(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
