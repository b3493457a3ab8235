//! Core trait definitions for crossover operators.
//!
//! [`Crossover`] is the pairwise contract shared by every two-parent
//! strategy; [`MultiParentCrossover`] covers strategies that blend any
//! number of parents into a single offspring. [`RealGene`] restricts blend
//! operators to real-valued genomes at compile time.

use crate::error::Result;
use crate::genome::Individual;
use rand::Rng;

/// Marker trait for real-valued genes.
///
/// Blend crossovers compute in `f64` and convert back. Built-in
/// implementations exist for `f64` and `f32`.
pub trait RealGene: Copy + PartialOrd + Send + Sync + std::fmt::Debug + 'static {
    /// Widens the gene to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows an `f64` back to the gene type.
    fn from_f64(value: f64) -> Self;
}

impl RealGene for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl RealGene for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

/// A two-parent recombination strategy.
///
/// Implementations are stateless apart from their parameters: every call is
/// determined by the parents and the random source, so a seeded `rng`
/// reproduces the same offspring.
///
/// Offspring are freshly allocated with invalid fitness and owned by the
/// caller. On error no offspring is returned.
///
/// # Implementing
///
/// ```ignore
/// struct CrossSwapHalves;
///
/// impl<G: Clone> Crossover<G> for CrossSwapHalves {
///     fn name(&self) -> &'static str { "swap-halves" }
///
///     fn apply<R: Rng + ?Sized>(
///         &self,
///         p1: &Individual<G>,
///         p2: &Individual<G>,
///         _rng: &mut R,
///     ) -> Result<(Individual<G>, Individual<G>)> {
///         let mid = p1.len() / 2;
///         let o1 = [&p1.genome[..mid], &p2.genome[mid..]].concat();
///         let o2 = [&p2.genome[..mid], &p1.genome[mid..]].concat();
///         Ok((Individual::new(o1), Individual::new(o2)))
///     }
/// }
/// ```
pub trait Crossover<G>: Send + Sync {
    /// Short human-readable name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Recombines two equal-length parents into two offspring.
    fn apply<R: Rng + ?Sized>(
        &self,
        parent1: &Individual<G>,
        parent2: &Individual<G>,
        rng: &mut R,
    ) -> Result<(Individual<G>, Individual<G>)>;
}

/// A recombination strategy over an arbitrary number of parents.
pub trait MultiParentCrossover<G>: Send + Sync {
    /// Number of parents each call expects.
    fn nb_parents(&self) -> usize;

    /// Blends `parents` into a single offspring.
    fn apply_many<R: Rng + ?Sized>(
        &self,
        parents: &[&Individual<G>],
        rng: &mut R,
    ) -> Result<Individual<G>>;
}
