//! Uniform random tour construction.

use rand::Rng;

use crate::graph::CostMatrix;
use crate::models::Tour;

/// Builds a tour by shuffling the cities: a random start city, then
/// repeated uniform draws, keeping each draw only if that city has not been
/// placed yet.
///
/// Rejection sampling against a fixed-size visited array is deliberate —
/// it reproduces the reference behavior and is perfectly adequate for the
/// small instances this solver targets. An empty graph yields an empty tour.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_search::constructive::random_tour;
/// use tsp_search::graph::CostMatrix;
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let graph = CostMatrix::random(7, &mut rng).unwrap();
/// let tour = random_tour(&graph, &mut rng);
/// assert!(tour.is_permutation_of(7));
/// ```
pub fn random_tour<R: Rng>(graph: &CostMatrix, rng: &mut R) -> Tour {
    let n = graph.size();
    if n == 0 {
        return Tour::new(Vec::new());
    }

    let mut visited = vec![false; n];
    let mut cities = Vec::with_capacity(n);

    let start = rng.random_range(0..n);
    cities.push(start);
    visited[start] = true;

    while cities.len() < n {
        let candidate = rng.random_range(0..n);
        if !visited[candidate] {
            cities.push(candidate);
            visited[candidate] = true;
        }
    }

    Tour::new(cities)
}
