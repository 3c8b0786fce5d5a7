//! Greedy nearest-neighbor construction.
//!
//! # Algorithm
//!
//! Start from a random city. Repeatedly take the nearest city reachable by
//! a strictly positive edge, consulting a private working copy of the cost
//! matrix. Whenever an unvisited city is appended, every edge incident to
//! the city just departed is zeroed in the working copy (both directions),
//! so no city can be re-selected as a neighbor of its former predecessor.
//!
//! The newly appended city's own row keeps its live edges, so the selector
//! can in principle hand back an already visited city; the walk then steps
//! onto it without recording a second visit. The loop still terminates:
//! the current city is always the most recently appended one, its edges to
//! every departed city are zeroed, and so each selection lands on an
//! unvisited city and shrinks the remainder.
//!
//! # Complexity
//!
//! O(n²) — one row scan per appended city.

use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::CostMatrix;
use crate::models::Tour;

/// Constructs a tour with the nearest-neighbor heuristic.
///
/// The shared graph is never mutated; edge consumption happens on a clone
/// owned by this call. Fails with [`Error::NoNeighborAvailable`] if the
/// current city's row holds no positive edge while cities remain unvisited,
/// which cannot happen for a correctly generated complete graph.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_search::constructive::greedy_tour;
/// use tsp_search::graph::CostMatrix;
///
/// let mut rng = StdRng::seed_from_u64(21);
/// let graph = CostMatrix::random(5, &mut rng).unwrap();
/// let tour = greedy_tour(&graph, &mut rng).unwrap();
/// assert!(tour.is_permutation_of(5));
/// ```
pub fn greedy_tour<R: Rng>(graph: &CostMatrix, rng: &mut R) -> Result<Tour> {
    let n = graph.size();
    if n == 0 {
        return Ok(Tour::new(Vec::new()));
    }

    let mut work = graph.clone();
    let mut visited = vec![false; n];
    let mut cities = Vec::with_capacity(n);

    let start = rng.random_range(0..n);
    cities.push(start);
    visited[start] = true;
    let mut current = start;
    let mut remaining = n - 1;

    while remaining > 0 {
        let next = work
            .nearest_neighbor(current)
            .ok_or(Error::NoNeighborAvailable(current))?;

        if !visited[next] {
            cities.push(next);
            visited[next] = true;
            remaining -= 1;
            // Retire the departed city so it cannot be selected again.
            work.clear_edges(current);
        }
        current = next;
    }

    Ok(Tour::new(cities))
}
