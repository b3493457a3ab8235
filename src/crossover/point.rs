//! N-point crossover.

use super::types::Crossover;
use crate::error::Result;
use crate::genome::{common_length, Individual};
use crate::random::random_ints;
use rand::Rng;

/// N-point crossover.
///
/// Picks `nb_points` distinct cut points shared by both parents and swaps
/// every other segment between them. Generalizes one-point (`nb_points = 1`)
/// and two-point (`nb_points = 2`) crossover.
///
/// # Algorithm
///
/// 1. Draw `nb_points` distinct positions in `[0, n)` and sort them
/// 2. Add `0` and `n` as outer boundaries, giving `nb_points + 1` segments
/// 3. Even segments copy `parent1 → child1`, `parent2 → child2`;
///    odd segments copy them crosswise
///
/// The children are complementary: at every position one child carries
/// parent1's gene and the other carries parent2's.
///
/// `nb_points = 0` returns copies of the parents.
///
/// # Complexity
/// O(n + k log k) for `k` points
///
/// # Examples
///
/// ```
/// use u_crossover::crossover::{CrossPoint, Crossover};
/// use u_crossover::{create_rng, Individual};
///
/// let p1 = Individual::new(vec![0, 0, 0, 0, 0, 0]);
/// let p2 = Individual::new(vec![1, 1, 1, 1, 1, 1]);
/// let mut rng = create_rng(42);
///
/// let (c1, c2) = CrossPoint::new(2).apply(&p1, &p2, &mut rng).unwrap();
/// assert_eq!(c1.len(), 6);
/// assert!(c1.genome.iter().zip(&c2.genome).all(|(a, b)| a != b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossPoint {
    /// Number of cut points. Must not exceed the genome length.
    pub nb_points: usize,
}

impl Default for CrossPoint {
    fn default() -> Self {
        Self { nb_points: 1 }
    }
}

impl CrossPoint {
    /// Creates an n-point crossover with `nb_points` cuts.
    pub fn new(nb_points: usize) -> Self {
        Self { nb_points }
    }
}

impl<G: Clone> Crossover<G> for CrossPoint {
    fn name(&self) -> &'static str {
        "n-point"
    }

    fn apply<R: Rng + ?Sized>(
        &self,
        parent1: &Individual<G>,
        parent2: &Individual<G>,
        rng: &mut R,
    ) -> Result<(Individual<G>, Individual<G>)> {
        let n = common_length(&[parent1, parent2])?;
        let mut points = random_ints(self.nb_points, 0, n, rng)?;
        points.sort_unstable();
        log::trace!("n-point crossover cut points: {points:?}");

        let (child1, child2) = cross_at_points(&parent1.genome, &parent2.genome, &points);
        Ok((Individual::new(child1), Individual::new(child2)))
    }
}

/// Builds both children from sorted, distinct cut points in `[0, n)`.
fn cross_at_points<G: Clone>(
    parent1: &[G],
    parent2: &[G],
    points: &[usize],
) -> (Vec<G>, Vec<G>) {
    let n = parent1.len();
    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);

    let mut bounds = Vec::with_capacity(points.len() + 2);
    bounds.push(0);
    bounds.extend_from_slice(points);
    bounds.push(n);

    for (segment, window) in bounds.windows(2).enumerate() {
        let (start, end) = (window[0], window[1]);
        let (src1, src2) = if segment % 2 == 0 {
            (parent1, parent2)
        } else {
            (parent2, parent1)
        };
        child1.extend_from_slice(&src1[start..end]);
        child2.extend_from_slice(&src2[start..end]);
    }

    (child1, child2)
}
