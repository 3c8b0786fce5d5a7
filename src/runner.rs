//! Pipeline entry points: strategy dispatch, single runs, and batches.
//!
//! This is the surface the interactive menu and plotting layer consume:
//! build a graph, pick a construction strategy, improve the result, and
//! aggregate repeated runs into summary statistics.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constructive::{greedy_tour, iterated_random_tour, random_tour};
use crate::error::Result;
use crate::graph::CostMatrix;
use crate::local_search::{improve, HillClimbConfig};
use crate::models::{RunResult, Tour};

/// Which construction heuristic seeds the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructionStrategy {
    /// One uniformly random tour.
    Random,

    /// Best of `trials + 1` independent random tours.
    IteratedRandom { trials: usize },

    /// Nearest-neighbor chaining from a random start city.
    Greedy,
}

/// Builds one initial tour with the chosen strategy.
pub fn construct_tour<R: Rng>(
    graph: &CostMatrix,
    strategy: ConstructionStrategy,
    rng: &mut R,
) -> Result<Tour> {
    match strategy {
        ConstructionStrategy::Random => Ok(random_tour(graph, rng)),
        ConstructionStrategy::IteratedRandom { trials } => {
            Ok(iterated_random_tour(graph, trials, rng))
        }
        ConstructionStrategy::Greedy => greedy_tour(graph, rng),
    }
}

/// Runs one construction + improvement pipeline.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_search::graph::CostMatrix;
/// use tsp_search::local_search::HillClimbConfig;
/// use tsp_search::runner::{run, ConstructionStrategy};
///
/// let mut rng = StdRng::seed_from_u64(2);
/// let graph = CostMatrix::random(6, &mut rng).unwrap();
/// let config = HillClimbConfig::default().with_iteration_cap(5_000);
///
/// let result = run(&graph, ConstructionStrategy::Greedy, &config, &mut rng).unwrap();
/// assert!(result.tour.is_permutation_of(6));
/// ```
pub fn run<R: Rng>(
    graph: &CostMatrix,
    strategy: ConstructionStrategy,
    config: &HillClimbConfig,
    rng: &mut R,
) -> Result<RunResult> {
    let start = construct_tour(graph, strategy, rng)?;
    improve(graph, start, config, rng)
}

/// Executes `repetitions` independent pipelines sequentially.
///
/// Runs share nothing but the read-only graph, so their results are
/// exactly what the same seeds would produce one at a time.
pub fn run_batch<R: Rng>(
    graph: &CostMatrix,
    strategy: ConstructionStrategy,
    config: &HillClimbConfig,
    repetitions: usize,
    rng: &mut R,
) -> Result<Vec<RunResult>> {
    let mut runs = Vec::with_capacity(repetitions);
    for _ in 0..repetitions {
        runs.push(run(graph, strategy, config, rng)?);
    }
    Ok(runs)
}

/// Summary statistics over a batch of runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Cheapest final cost across the batch.
    pub best_cost: u64,

    /// Most expensive final cost across the batch.
    pub worst_cost: u64,

    /// Mean final cost.
    pub mean_cost: f64,

    /// Index into the batch of the run that achieved `best_cost`
    /// (first such run on ties).
    pub best_run: usize,
}

/// Aggregates final costs over a batch. Returns `None` for an empty batch.
pub fn summarize(runs: &[RunResult]) -> Option<BatchSummary> {
    let first = runs.first()?;
    let mut summary = BatchSummary {
        best_cost: first.cost,
        worst_cost: first.cost,
        mean_cost: 0.0,
        best_run: 0,
    };
    let mut total: u64 = 0;

    for (index, run) in runs.iter().enumerate() {
        if run.cost < summary.best_cost {
            summary.best_cost = run.cost;
            summary.best_run = index;
        }
        summary.worst_cost = summary.worst_cost.max(run.cost);
        total += run.cost;
    }
    summary.mean_cost = total as f64 / runs.len() as f64;

    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_end_to_end_iterated_random() {
        // Seeded scenario: 5 cities, 10 extra random trials, then improve.
        let mut rng = StdRng::seed_from_u64(2015);
        let graph = CostMatrix::random(5, &mut rng).expect("valid size");

        let start = construct_tour(
            &graph,
            ConstructionStrategy::IteratedRandom { trials: 10 },
            &mut rng,
        )
        .expect("construction");
        let start_cost = graph.tour_cost(&start).expect("valid tour");

        let config = HillClimbConfig::default()
            .with_stagnation_limit(50)
            .with_iteration_cap(1_000);
        let result = improve(&graph, start, &config, &mut rng).expect("valid run");

        assert!(result.cost <= start_cost);
        assert!(result.tour.is_permutation_of(5));
        assert!(result.trace.len() <= 1_000);
    }

    #[test]
    fn test_all_strategies_produce_permutations() {
        let mut rng = StdRng::seed_from_u64(9);
        let graph = CostMatrix::random(7, &mut rng).expect("valid size");
        let strategies = [
            ConstructionStrategy::Random,
            ConstructionStrategy::IteratedRandom { trials: 5 },
            ConstructionStrategy::Greedy,
        ];
        for strategy in strategies {
            let tour = construct_tour(&graph, strategy, &mut rng).expect("construction");
            assert!(tour.is_permutation_of(7), "{strategy:?}");
        }
    }

    #[test]
    fn test_run_batch_counts_and_validity() {
        let mut rng = StdRng::seed_from_u64(31);
        let graph = CostMatrix::random(6, &mut rng).expect("valid size");
        let config = HillClimbConfig::default()
            .with_stagnation_limit(40)
            .with_iteration_cap(2_000);

        let runs = run_batch(&graph, ConstructionStrategy::Random, &config, 4, &mut rng)
            .expect("batch");
        assert_eq!(runs.len(), 4);
        for run in &runs {
            assert!(run.tour.is_permutation_of(6));
            assert_eq!(graph.tour_cost(&run.tour).expect("valid tour"), run.cost);
        }
    }

    #[test]
    fn test_summarize_batch() {
        let mut rng = StdRng::seed_from_u64(55);
        let graph = CostMatrix::random(6, &mut rng).expect("valid size");
        let config = HillClimbConfig::default()
            .with_stagnation_limit(40)
            .with_iteration_cap(2_000);

        let runs = run_batch(&graph, ConstructionStrategy::Greedy, &config, 5, &mut rng)
            .expect("batch");
        let summary = summarize(&runs).expect("non-empty batch");

        assert!(summary.best_cost <= summary.worst_cost);
        assert!(summary.mean_cost >= summary.best_cost as f64);
        assert!(summary.mean_cost <= summary.worst_cost as f64);
        assert_eq!(runs[summary.best_run].cost, summary.best_cost);
    }

    #[test]
    fn test_summarize_empty_batch() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_run_batch_zero_repetitions() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = CostMatrix::random(3, &mut rng).expect("valid size");
        let config = HillClimbConfig::default();
        let runs = run_batch(&graph, ConstructionStrategy::Random, &config, 0, &mut rng)
            .expect("batch");
        assert!(runs.is_empty());
    }
}
