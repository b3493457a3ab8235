//! Partially Mapped Crossover for permutation genomes.

use super::types::Crossover;
use crate::error::{CrossoverError, Result};
use crate::genome::{common_length, get_index, Individual};
use rand::Rng;

/// Partially Mapped Crossover (PMX).
///
/// Keeps both children valid permutations: every value of the parents
/// appears exactly once in each child. Useful for ordering problems such as
/// TSP tours or job sequences.
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Start `child1` as a copy of `parent1`, `child2` as a copy of `parent2`
/// 2. Pick a crossover point `p` with `0 < p < n − 1`
/// 3. For each `i < p`, locate `parent2[i]` in `child1` and swap it into
///    position `i`; mirror for `child2` with `parent1[i]`
///
/// Swapping rather than overwriting relocates the displaced gene to where the
/// incoming one came from, so no value is duplicated or lost. After the loop
/// the prefix `[0, p)` of each child holds the other parent's genes.
///
/// # Preconditions
///
/// Both parents must be permutations of the same values. This is not
/// checked up front; a missing value surfaces as
/// [`CrossoverError::ValueNotFound`] and no child is returned.
///
/// # Complexity
/// O(n²): each of the `p` steps scans a child linearly
///
/// # Examples
///
/// ```
/// use u_crossover::crossover::{CrossPMX, Crossover};
/// use u_crossover::{create_rng, Individual};
///
/// let p1 = Individual::new(vec![0, 1, 2, 3, 4, 5]);
/// let p2 = Individual::new(vec![5, 3, 1, 0, 4, 2]);
/// let mut rng = create_rng(42);
///
/// let (c1, _c2) = CrossPMX.apply(&p1, &p2, &mut rng).unwrap();
/// let mut sorted = c1.genome.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
/// ```
///
/// # References
///
/// Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrossPMX;

impl CrossPMX {
    /// Shortest genome with an interior crossover point.
    pub const MIN_LENGTH: usize = 3;
}

impl<G: Clone + PartialEq> Crossover<G> for CrossPMX {
    fn name(&self) -> &'static str {
        "PMX"
    }

    fn apply<R: Rng + ?Sized>(
        &self,
        parent1: &Individual<G>,
        parent2: &Individual<G>,
        rng: &mut R,
    ) -> Result<(Individual<G>, Individual<G>)> {
        let n = common_length(&[parent1, parent2])?;
        if n < Self::MIN_LENGTH {
            return Err(CrossoverError::GenomeTooShort {
                operator: "PMX",
                length: n,
                minimum: Self::MIN_LENGTH,
            });
        }

        let point = rng.random_range(1..n - 1);
        log::trace!("PMX crossover point: {point}");

        let (child1, child2) = pmx_at_point(&parent1.genome, &parent2.genome, point)?;
        Ok((Individual::new(child1), Individual::new(child2)))
    }
}

/// Runs the PMX mapping for a fixed crossover point.
fn pmx_at_point<G: Clone + PartialEq>(
    parent1: &[G],
    parent2: &[G],
    point: usize,
) -> Result<(Vec<G>, Vec<G>)> {
    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();

    for i in 0..point {
        let a = get_index(&parent2[i], &child1)?;
        child1.swap(a, i);
        let b = get_index(&parent1[i], &child2)?;
        child2.swap(b, i);
    }

    Ok((child1, child2))
}
