//! Two-position swap neighborhood.

use rand::Rng;

use crate::models::Tour;

/// Returns a new tour with two uniformly drawn positions exchanged.
///
/// The two draws are independent and may coincide, in which case the result
/// equals the input; that 1/n no-op is part of the neighborhood and is not
/// special-cased away. The input tour is never mutated.
pub fn random_swap<R: Rng>(tour: &Tour, rng: &mut R) -> Tour {
    let mut swapped = tour.clone();
    if tour.is_empty() {
        return swapped;
    }
    let i = rng.random_range(0..tour.len());
    let j = rng.random_range(0..tour.len());
    swapped.swap(i, j);
    swapped
}
