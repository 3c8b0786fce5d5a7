//! Iterated random construction.

use rand::Rng;

use crate::graph::CostMatrix;
use crate::models::Tour;

use super::random_tour;

/// Builds `trials + 1` independent random tours and returns the cheapest.
///
/// Pure exploration: no information flows between attempts, and on a cost
/// tie the earliest tour found is kept. `trials == 0` degenerates to a
/// single [`random_tour`] call.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_search::constructive::iterated_random_tour;
/// use tsp_search::graph::CostMatrix;
///
/// let mut rng = StdRng::seed_from_u64(11);
/// let graph = CostMatrix::random(6, &mut rng).unwrap();
/// let tour = iterated_random_tour(&graph, 10, &mut rng);
/// assert!(tour.is_permutation_of(6));
/// ```
pub fn iterated_random_tour<R: Rng>(graph: &CostMatrix, trials: usize, rng: &mut R) -> Tour {
    let mut best = random_tour(graph, rng);
    let mut best_cost = graph.cycle_cost(best.cities());

    for _ in 0..trials {
        let candidate = random_tour(graph, rng);
        let candidate_cost = graph.cycle_cost(candidate.cities());
        if candidate_cost < best_cost {
            best = candidate;
            best_cost = candidate_cost;
        }
    }

    best
}
