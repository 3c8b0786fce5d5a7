//! Tour representation.

use serde::{Deserialize, Serialize};

/// An ordered sequence of city indices representing a closed tour.
///
/// A valid tour over an n-city graph is a permutation of `[0, n)`; the last
/// city implicitly connects back to the first. `Tour` itself does not
/// enforce validity — construction heuristics only ever produce
/// permutations, and [`CostMatrix::tour_cost`](crate::graph::CostMatrix::tour_cost)
/// rejects anything else.
///
/// # Examples
///
/// ```
/// use tsp_search::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 3, 1]);
/// assert_eq!(tour.len(), 4);
/// assert!(tour.is_permutation_of(4));
/// assert!(!tour.is_permutation_of(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Wraps a visiting order.
    pub fn new(cities: Vec<usize>) -> Self {
        Self { cities }
    }

    /// The visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_cities(self) -> Vec<usize> {
        self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns `true` if the tour visits every city in `[0, n)` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.cities.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.cities {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.cities.swap(i, j);
    }
}
