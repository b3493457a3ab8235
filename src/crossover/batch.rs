//! Crossover over many independent parent pairs.
//!
//! Each pair gets its own random stream derived from a base seed, so results
//! do not depend on evaluation order. With the `parallel` feature the pairs
//! are processed with rayon; output is identical either way.

use super::types::Crossover;
use crate::error::Result;
use crate::genome::Individual;
use crate::random::create_rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Children of one parent pair.
pub type Offspring<G> = (Individual<G>, Individual<G>);

/// Applies `op` to every `(parent1, parent2)` pair.
///
/// Pair `k` uses the stream `create_rng(seed.wrapping_add(k))`. Output order
/// matches input order. If any pair fails, the error of the earliest failing
/// pair in input order is returned, with or without the `parallel` feature.
///
/// # Examples
///
/// ```
/// use u_crossover::crossover::{cross_pairs, CrossPoint};
/// use u_crossover::Individual;
///
/// let a = Individual::new(vec![0u8; 6]);
/// let b = Individual::new(vec![1u8; 6]);
/// let pairs = vec![(&a, &b), (&b, &a)];
///
/// let children = cross_pairs(&CrossPoint::new(1), &pairs, 42).unwrap();
/// assert_eq!(children.len(), 2);
/// ```
pub fn cross_pairs<G, C>(
    op: &C,
    pairs: &[(&Individual<G>, &Individual<G>)],
    seed: u64,
) -> Result<Vec<Offspring<G>>>
where
    G: Send + Sync,
    C: Crossover<G>,
{
    log::debug!(
        "{} crossover over {} pairs (seed {seed})",
        op.name(),
        pairs.len()
    );

    let cross_one = |(k, (p1, p2)): (usize, &(&Individual<G>, &Individual<G>))| {
        let mut rng = create_rng(seed.wrapping_add(k as u64));
        op.apply(p1, p2, &mut rng)
    };

    // Failures resolve to the earliest pair by index.
    #[cfg(feature = "parallel")]
    let outcomes: Vec<Result<Offspring<G>>> =
        pairs.par_iter().enumerate().map(cross_one).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<Result<Offspring<G>>> =
        pairs.iter().enumerate().map(cross_one).collect();

    outcomes.into_iter().collect()
}
