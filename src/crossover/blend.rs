//! Arithmetic blend crossovers for real-valued genomes.
//!
//! - [`CrossUniformF`]: per-gene random convex combination of two parents
//! - [`CrossProportionateF`]: weighted combination of any number of parents
//!
//! Both keep every offspring gene inside the hyper-rectangle spanned by the
//! parents, so bounded search spaces stay bounded.
//!
//! # References
//!
//! - Radcliffe (1991), "Equivalence Class Analysis of Genetic Algorithms"
//! - Eiben, Raué & Ruttkay (1994), "Genetic algorithms with multi-parent
//!   recombination"

use super::types::{Crossover, MultiParentCrossover, RealGene};
use crate::error::{CrossoverError, Result};
use crate::genome::{common_length, Individual};
use rand::Rng;

/// Uniform arithmetic blend crossover.
///
/// For every gene `i` a fresh `p ∈ [0, 1)` is drawn and
///
/// ```text
/// child1[i] = p·parent1[i] + (1 − p)·parent2[i]
/// child2[i] = (1 − p)·parent1[i] + p·parent2[i]
/// ```
///
/// Each gene uses its own `p`, so a child is not a single convex combination
/// of the parents' genomes.
///
/// # Complexity
/// O(n)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrossUniformF;

impl<G: RealGene> Crossover<G> for CrossUniformF {
    fn name(&self) -> &'static str {
        "uniform-blend"
    }

    fn apply<R: Rng + ?Sized>(
        &self,
        parent1: &Individual<G>,
        parent2: &Individual<G>,
        rng: &mut R,
    ) -> Result<(Individual<G>, Individual<G>)> {
        let n = common_length(&[parent1, parent2])?;
        let mut child1 = Vec::with_capacity(n);
        let mut child2 = Vec::with_capacity(n);

        for (&a, &b) in parent1.genome.iter().zip(&parent2.genome) {
            let p: f64 = rng.random();
            let (x, y) = blend_gene(a, b, p);
            child1.push(x);
            child2.push(y);
        }

        Ok((Individual::new(child1), Individual::new(child2)))
    }
}

/// Blends one gene pair with weight `p` on `a` for the first child.
fn blend_gene<G: RealGene>(a: G, b: G, p: f64) -> (G, G) {
    let (fa, fb) = (a.to_f64(), b.to_f64());
    let (lo, hi) = if fa <= fb { (fa, fb) } else { (fb, fa) };
    let x = clamp_between(p * fa + (1.0 - p) * fb, lo, hi);
    let y = clamp_between((1.0 - p) * fa + p * fb, lo, hi);
    (G::from_f64(x), G::from_f64(y))
}

/// Clamps away rounding drift. NaN passes through unchanged.
fn clamp_between(value: f64, lo: f64, hi: f64) -> f64 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Weighted multi-parent blend crossover.
///
/// Draws one weight per parent uniformly from `[0, 1)`, normalizes the
/// weights to sum to 1, and produces a **single** child whose genes are the
/// weighted sum of the parents' genes:
///
/// ```text
/// child[i] = Σ_j w[j] · parent_j[i]
/// ```
///
/// If every drawn weight is zero, equal weights `1 / nb_parents` are used.
///
/// # Complexity
/// O(n · k) for `k` parents
///
/// # Examples
///
/// ```
/// use u_crossover::crossover::{CrossProportionateF, MultiParentCrossover};
/// use u_crossover::{create_rng, Individual};
///
/// let a = Individual::new(vec![0.0, 0.0]);
/// let b = Individual::new(vec![1.0, 1.0]);
/// let c = Individual::new(vec![2.0, 2.0]);
/// let mut rng = create_rng(42);
///
/// let child = CrossProportionateF::new(3)
///     .apply_many(&[&a, &b, &c], &mut rng)
///     .unwrap();
/// assert!(child.genome.iter().all(|&g| (0.0..=2.0).contains(&g)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossProportionateF {
    /// Number of parents blended per call. At least 2.
    pub nb_parents: usize,
}

impl Default for CrossProportionateF {
    fn default() -> Self {
        Self { nb_parents: 2 }
    }
}

impl CrossProportionateF {
    /// Minimum number of parents.
    pub const MIN_PARENTS: usize = 2;

    /// Creates a proportionate crossover over `nb_parents` parents.
    pub fn new(nb_parents: usize) -> Self {
        Self { nb_parents }
    }

    /// Draws `nb_parents` normalized weights.
    fn sample_weights<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let raw: Vec<f64> = (0..self.nb_parents).map(|_| rng.random()).collect();
        let total: f64 = raw.iter().sum();
        if total > 0.0 {
            raw.into_iter().map(|w| w / total).collect()
        } else {
            vec![1.0 / self.nb_parents as f64; self.nb_parents]
        }
    }
}

impl<G: RealGene> MultiParentCrossover<G> for CrossProportionateF {
    fn nb_parents(&self) -> usize {
        self.nb_parents
    }

    fn apply_many<R: Rng + ?Sized>(
        &self,
        parents: &[&Individual<G>],
        rng: &mut R,
    ) -> Result<Individual<G>> {
        if self.nb_parents < Self::MIN_PARENTS {
            return Err(CrossoverError::NotEnoughParents {
                minimum: Self::MIN_PARENTS,
                actual: self.nb_parents,
            });
        }
        if parents.len() < Self::MIN_PARENTS {
            return Err(CrossoverError::NotEnoughParents {
                minimum: Self::MIN_PARENTS,
                actual: parents.len(),
            });
        }
        if parents.len() != self.nb_parents {
            return Err(CrossoverError::ParentCountMismatch {
                expected: self.nb_parents,
                actual: parents.len(),
            });
        }
        let n = common_length(parents)?;

        let weights = self.sample_weights(rng);
        log::trace!("proportionate crossover weights: {weights:?}");

        Ok(Individual::from_fn(n, |i| {
            let mut sum = 0.0;
            let mut lo = f64::INFINITY;
            let mut hi = f64::NEG_INFINITY;
            for (parent, w) in parents.iter().zip(&weights) {
                let g = parent.genome[i].to_f64();
                sum += w * g;
                lo = lo.min(g);
                hi = hi.max(g);
            }
            G::from_f64(clamp_between(sum, lo, hi))
        }))
    }
}
