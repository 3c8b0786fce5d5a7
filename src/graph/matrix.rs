//! Dense cost matrix for complete graphs.

use rand::Rng;

use crate::error::{Error, Result};
use crate::models::Tour;

/// Default lower bound for randomly drawn edge costs.
pub const DEFAULT_MIN_COST: u32 = 1;

/// Default upper bound for randomly drawn edge costs.
pub const DEFAULT_MAX_COST: u32 = 9;

/// A dense n×n matrix of integer edge costs stored in row-major order.
///
/// Represents a symmetric complete graph: `cost[i][i] == 0`, and for a
/// randomly generated matrix every off-diagonal entry is strictly positive.
/// The matrix is immutable once handed to callers; construction heuristics
/// that consume edges work on a private clone.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_search::graph::CostMatrix;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let graph = CostMatrix::random(6, &mut rng).unwrap();
/// assert_eq!(graph.size(), 6);
/// assert!(graph.is_symmetric());
/// assert_eq!(graph.get(3, 3), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    data: Vec<u32>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a cost matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<u32>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Generates a random symmetric complete graph with costs in the
    /// default range `1..=9`.
    ///
    /// Fails with [`Error::InvalidInput`] when `num_cities < 1`.
    pub fn random<R: Rng>(num_cities: usize, rng: &mut R) -> Result<Self> {
        Self::random_with_range(num_cities, DEFAULT_MIN_COST, DEFAULT_MAX_COST, rng)
    }

    /// Generates a random symmetric complete graph with costs drawn
    /// uniformly from `min_cost..=max_cost`.
    ///
    /// One value is drawn per unordered city pair and mirrored to both
    /// directions; the diagonal stays zero.
    ///
    /// Fails with [`Error::InvalidInput`] when `num_cities < 1`, when
    /// `min_cost < 1`, or when `min_cost > max_cost`.
    pub fn random_with_range<R: Rng>(
        num_cities: usize,
        min_cost: u32,
        max_cost: u32,
        rng: &mut R,
    ) -> Result<Self> {
        if num_cities < 1 {
            return Err(Error::invalid_input("number of cities must be at least 1"));
        }
        if min_cost < 1 {
            return Err(Error::invalid_input("minimum edge cost must be positive"));
        }
        if min_cost > max_cost {
            return Err(Error::invalid_input(format!(
                "empty cost range: {min_cost}..={max_cost}"
            )));
        }

        let mut matrix = Self::new(num_cities);
        for i in 0..num_cities {
            for j in (i + 1)..num_cities {
                let cost = rng.random_range(min_cost..=max_cost);
                matrix.set(i, j, cost);
                matrix.set(j, i, cost);
            }
        }
        Ok(matrix)
    }

    /// Returns the travel cost from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u32 {
        self.data[from * self.size + to]
    }

    pub(crate) fn set(&mut self, from: usize, to: usize, cost: u32) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of cities in this graph.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from`: the column index of the
    /// smallest strictly positive entry in its row.
    ///
    /// A zero entry means "no edge" (the self-loop, or an edge already
    /// consumed by a construction working copy) and is skipped. Ties keep
    /// the leftmost index. Returns `None` when the row holds no positive
    /// entry at all.
    pub fn nearest_neighbor(&self, from: usize) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for to in 0..self.size {
            let cost = self.get(from, to);
            if cost == 0 {
                continue;
            }
            match best {
                Some((_, min)) if cost >= min => {}
                _ => best = Some((to, cost)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Zeroes every edge incident to `city`, in both directions.
    ///
    /// Only meaningful on a working copy; greedy construction uses this to
    /// retire a departed city.
    pub(crate) fn clear_edges(&mut self, city: usize) {
        for other in 0..self.size {
            self.set(city, other, 0);
            self.set(other, city, 0);
        }
    }

    /// Computes the total cost of a closed tour, including the edge from
    /// the last city back to the first.
    ///
    /// Fails with [`Error::InvalidInput`] unless `tour` is a permutation of
    /// `[0, size)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_search::graph::CostMatrix;
    /// use tsp_search::models::Tour;
    ///
    /// let graph = CostMatrix::from_data(
    ///     4,
    ///     vec![0, 1, 2, 3, 1, 0, 4, 5, 2, 4, 0, 6, 3, 5, 6, 0],
    /// )
    /// .unwrap();
    /// let tour = Tour::new(vec![0, 1, 2, 3]);
    /// // 0→1 + 1→2 + 2→3 + closing 3→0 = 1 + 4 + 6 + 3
    /// assert_eq!(graph.tour_cost(&tour).unwrap(), 14);
    /// ```
    pub fn tour_cost(&self, tour: &Tour) -> Result<u64> {
        if !tour.is_permutation_of(self.size) {
            return Err(Error::invalid_input(format!(
                "tour is not a permutation of 0..{}",
                self.size
            )));
        }
        Ok(self.cycle_cost(tour.cities()))
    }

    /// Closed-cycle cost without permutation validation. Callers must
    /// guarantee every index is in bounds.
    pub(crate) fn cycle_cost(&self, cities: &[usize]) -> u64 {
        if cities.is_empty() {
            return 0;
        }
        let mut total: u64 = 0;
        for pair in cities.windows(2) {
            total += u64::from(self.get(pair[0], pair[1]));
        }
        total += u64::from(self.get(cities[cities.len() - 1], cities[0]));
        total
    }
}
