//! Random-source helpers.
//!
//! Operators never seed their own randomness: the caller owns the random
//! source and passes it by `&mut`. [`create_rng`] is the canonical way to
//! build a reproducible one.

use crate::error::{CrossoverError, Result};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Creates a seeded random number generator.
///
/// The same seed always yields the same stream, which makes every operator
/// in this crate reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `k` pairwise distinct integers from `[low, high)`.
///
/// The order of the returned values is unspecified; sort them if the caller
/// needs ascending points.
///
/// # Errors
/// [`CrossoverError::NotEnoughPositions`] if `k > high - low`.
///
/// # Complexity
/// O(k) expected (Floyd / partial Fisher-Yates via `rand::seq::index`).
pub fn random_ints<R: Rng + ?Sized>(
    k: usize,
    low: usize,
    high: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let available = high.saturating_sub(low);
    if k > available {
        return Err(CrossoverError::NotEnoughPositions {
            requested: k,
            available,
        });
    }
    if k == 0 {
        return Ok(Vec::new());
    }
    Ok(index::sample(rng, available, k)
        .into_iter()
        .map(|i| low + i)
        .collect())
}
