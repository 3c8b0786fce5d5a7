//! Randomized hill-climbing with plateau acceptance.
//!
//! # Algorithm
//!
//! Each iteration perturbs the current tour with one random two-position
//! swap. Strictly cheaper candidates are accepted and reset the stagnation
//! counter; equal-cost candidates are also accepted — a lateral move that
//! randomizes among equal-cost tours — but count as stagnation; worse
//! candidates are rejected. The search stops once the stagnation counter
//! reaches its limit or the total iteration count reaches the cap.
//!
//! The convergence trace records the cost held when *entering* each
//! iteration, so it is non-increasing and its first entry is the cost of
//! the unimproved starting tour.

use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::CostMatrix;
use crate::models::{RunResult, Tour, TracePoint};

use super::random_swap;

/// Default number of consecutive non-improving iterations before stopping.
pub const DEFAULT_STAGNATION_LIMIT: usize = 500;

/// Default hard cap on total iterations.
pub const DEFAULT_ITERATION_CAP: usize = 500_000;

/// Configuration for [`improve`].
///
/// # Examples
///
/// ```
/// use tsp_search::local_search::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_stagnation_limit(50)
///     .with_iteration_cap(1_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HillClimbConfig {
    /// Consecutive iterations without a strict improvement before the
    /// search terminates.
    pub stagnation_limit: usize,

    /// Hard upper bound on total iterations, fired if stagnation never is.
    pub iteration_cap: usize,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            stagnation_limit: DEFAULT_STAGNATION_LIMIT,
            iteration_cap: DEFAULT_ITERATION_CAP,
        }
    }
}

impl HillClimbConfig {
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    pub fn with_iteration_cap(mut self, cap: usize) -> Self {
        self.iteration_cap = cap;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.stagnation_limit == 0 {
            return Err(Error::invalid_input("stagnation_limit must be at least 1"));
        }
        if self.iteration_cap == 0 {
            return Err(Error::invalid_input("iteration_cap must be at least 1"));
        }
        Ok(())
    }
}

/// Improves `start` by repeated-swap hill-climbing.
///
/// Fails with [`Error::InvalidInput`] when the config is invalid or `start`
/// is not a permutation of the graph's cities. The returned trace never
/// holds more than `iteration_cap` entries.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_search::constructive::random_tour;
/// use tsp_search::graph::CostMatrix;
/// use tsp_search::local_search::{improve, HillClimbConfig};
///
/// let mut rng = StdRng::seed_from_u64(17);
/// let graph = CostMatrix::random(8, &mut rng).unwrap();
/// let start = random_tour(&graph, &mut rng);
/// let start_cost = graph.tour_cost(&start).unwrap();
///
/// let config = HillClimbConfig::default().with_iteration_cap(10_000);
/// let result = improve(&graph, start, &config, &mut rng).unwrap();
/// assert!(result.cost <= start_cost);
/// ```
pub fn improve<R: Rng>(
    graph: &CostMatrix,
    start: Tour,
    config: &HillClimbConfig,
    rng: &mut R,
) -> Result<RunResult> {
    config.validate()?;
    let mut current_cost = graph.tour_cost(&start)?;
    let mut current = start;

    let mut trace = Vec::new();
    let mut stagnant = 0usize;
    let mut iterations = 0usize;

    loop {
        trace.push(TracePoint {
            iteration: iterations,
            cost: current_cost,
        });

        let candidate = random_swap(&current, rng);
        let candidate_cost = graph.cycle_cost(candidate.cities());

        if candidate_cost < current_cost {
            current = candidate;
            current_cost = candidate_cost;
            stagnant = 0;
        } else if candidate_cost == current_cost {
            // Lateral move: same cost, different (or identical) tour.
            current = candidate;
            stagnant += 1;
        } else {
            stagnant += 1;
        }

        iterations += 1;
        if stagnant >= config.stagnation_limit || iterations >= config.iteration_cap {
            break;
        }
    }

    Ok(RunResult {
        tour: current,
        cost: current_cost,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::random_tour;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_setup(seed: u64, n: usize) -> (CostMatrix, Tour, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = CostMatrix::random(n, &mut rng).expect("valid size");
        let start = random_tour(&graph, &mut rng);
        (graph, start, rng)
    }

    #[test]
    fn test_improve_never_worsens() {
        let (graph, start, mut rng) = small_setup(42, 10);
        let start_cost = graph.tour_cost(&start).expect("valid tour");
        let config = HillClimbConfig::default()
            .with_stagnation_limit(100)
            .with_iteration_cap(5_000);
        let result = improve(&graph, start, &config, &mut rng).expect("valid run");
        assert!(result.cost <= start_cost);
        assert_eq!(result.initial_cost(), Some(start_cost));
    }

    #[test]
    fn test_trace_is_non_increasing() {
        let (graph, start, mut rng) = small_setup(7, 12);
        let config = HillClimbConfig::default()
            .with_stagnation_limit(200)
            .with_iteration_cap(10_000);
        let result = improve(&graph, start, &config, &mut rng).expect("valid run");
        for window in result.trace.windows(2) {
            assert!(
                window[1].cost <= window[0].cost,
                "trace must be non-increasing: {} then {}",
                window[0].cost,
                window[1].cost
            );
        }
    }

    #[test]
    fn test_trace_respects_iteration_cap() {
        let (graph, start, mut rng) = small_setup(3, 8);
        let config = HillClimbConfig::default()
            .with_stagnation_limit(1_000_000)
            .with_iteration_cap(50);
        let result = improve(&graph, start, &config, &mut rng).expect("valid run");
        assert!(result.trace.len() <= 50);
    }

    #[test]
    fn test_trace_iterations_are_sequential() {
        let (graph, start, mut rng) = small_setup(19, 6);
        let config = HillClimbConfig::default()
            .with_stagnation_limit(30)
            .with_iteration_cap(500);
        let result = improve(&graph, start, &config, &mut rng).expect("valid run");
        for (expected, point) in result.trace.iter().enumerate() {
            assert_eq!(point.iteration, expected);
        }
    }

    #[test]
    fn test_final_tour_is_permutation() {
        let (graph, start, mut rng) = small_setup(23, 11);
        let config = HillClimbConfig::default()
            .with_stagnation_limit(100)
            .with_iteration_cap(2_000);
        let result = improve(&graph, start, &config, &mut rng).expect("valid run");
        assert!(result.tour.is_permutation_of(11));
        assert_eq!(graph.tour_cost(&result.tour).expect("valid tour"), result.cost);
    }

    #[test]
    fn test_single_city_terminates_by_stagnation() {
        // Every swap on a one-city tour is a no-op at cost 0, so the run
        // must stop after exactly stagnation_limit iterations.
        let graph = CostMatrix::from_data(1, vec![0]).expect("valid");
        let mut rng = StdRng::seed_from_u64(1);
        let config = HillClimbConfig::default()
            .with_stagnation_limit(25)
            .with_iteration_cap(1_000);
        let result = improve(&graph, Tour::new(vec![0]), &config, &mut rng).expect("valid run");
        assert_eq!(result.cost, 0);
        assert_eq!(result.trace.len(), 25);
    }

    #[test]
    fn test_rejects_invalid_start_tour() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = CostMatrix::random(4, &mut rng).expect("valid size");
        let bad = Tour::new(vec![0, 1, 2]);
        let config = HillClimbConfig::default();
        assert!(matches!(
            improve(&graph, bad, &config, &mut rng),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_zero_limits() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = CostMatrix::random(3, &mut rng).expect("valid size");
        let start = random_tour(&graph, &mut rng);

        let config = HillClimbConfig::default().with_stagnation_limit(0);
        assert!(improve(&graph, start.clone(), &config, &mut rng).is_err());

        let config = HillClimbConfig::default().with_iteration_cap(0);
        assert!(improve(&graph, start, &config, &mut rng).is_err());
    }
}
