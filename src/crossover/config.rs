//! Crossover strategy selection.
//!
//! [`CrossoverConfig`] names the operator a GA uses, chosen once at
//! algorithm-construction time, and dispatches parents to it.

use super::blend::{CrossProportionateF, CrossUniformF};
use super::pmx::CrossPMX;
use super::point::CrossPoint;
use super::types::{Crossover, MultiParentCrossover, RealGene};
use crate::error::{CrossoverError, Result};
use crate::genome::Individual;
use rand::Rng;

/// Crossover strategy and its parameters.
///
/// # Examples
///
/// ```
/// use u_crossover::crossover::CrossoverConfig;
/// use u_crossover::{create_rng, Individual};
///
/// let config = CrossoverConfig::point(2);
/// assert!(config.validate(8).is_ok());
///
/// let p1 = Individual::new(vec![0.0; 8]);
/// let p2 = Individual::new(vec![1.0; 8]);
/// let children = config.recombine(&[&p1, &p2], &mut create_rng(42)).unwrap();
/// assert_eq!(children.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum CrossoverConfig {
    /// N-point crossover ([`CrossPoint`]). Works on any gene type.
    Point {
        /// Number of cut points.
        nb_points: usize,
    },

    /// Uniform arithmetic blend ([`CrossUniformF`]). Real-valued genes only.
    UniformF,

    /// Weighted multi-parent blend ([`CrossProportionateF`]).
    /// Real-valued genes only; produces a single child.
    ProportionateF {
        /// Number of parents blended per call. At least 2.
        nb_parents: usize,
    },

    /// Partially Mapped Crossover ([`CrossPMX`]). Permutation genomes.
    Pmx,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        CrossoverConfig::Point { nb_points: 1 }
    }
}

impl CrossoverConfig {
    /// N-point crossover with `nb_points` cuts.
    pub fn point(nb_points: usize) -> Self {
        CrossoverConfig::Point { nb_points }
    }

    /// Proportionate blend over `nb_parents` parents.
    pub fn proportionate(nb_parents: usize) -> Self {
        CrossoverConfig::ProportionateF { nb_parents }
    }

    /// Operator name, as used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            CrossoverConfig::Point { .. } => "n-point",
            CrossoverConfig::UniformF => "uniform-blend",
            CrossoverConfig::ProportionateF { .. } => "proportionate-blend",
            CrossoverConfig::Pmx => "PMX",
        }
    }

    /// Number of parents one call consumes.
    pub fn parents_required(&self) -> usize {
        match self {
            CrossoverConfig::ProportionateF { nb_parents } => *nb_parents,
            _ => 2,
        }
    }

    /// Number of children one call produces.
    pub fn offspring_count(&self) -> usize {
        match self {
            CrossoverConfig::ProportionateF { .. } => 1,
            _ => 2,
        }
    }

    /// Whether the strategy needs real-valued genes.
    pub fn requires_real_genes(&self) -> bool {
        matches!(
            self,
            CrossoverConfig::UniformF | CrossoverConfig::ProportionateF { .. }
        )
    }

    /// Validates the parameters against a genome length.
    pub fn validate(&self, genome_len: usize) -> Result<()> {
        match *self {
            CrossoverConfig::Point { nb_points } if nb_points > genome_len => {
                Err(CrossoverError::InvalidConfig(format!(
                    "nb_points ({nb_points}) exceeds genome length ({genome_len})"
                )))
            }
            CrossoverConfig::ProportionateF { nb_parents }
                if nb_parents < CrossProportionateF::MIN_PARENTS =>
            {
                Err(CrossoverError::InvalidConfig(format!(
                    "nb_parents must be at least {}, got {nb_parents}",
                    CrossProportionateF::MIN_PARENTS
                )))
            }
            CrossoverConfig::Pmx if genome_len < CrossPMX::MIN_LENGTH => {
                Err(CrossoverError::GenomeTooShort {
                    operator: "PMX",
                    length: genome_len,
                    minimum: CrossPMX::MIN_LENGTH,
                })
            }
            _ => Ok(()),
        }
    }

    /// Recombines real-valued parents with the configured strategy.
    ///
    /// Pairwise strategies expect exactly two parents and return two
    /// children; [`ProportionateF`](Self::ProportionateF) expects
    /// `nb_parents` parents and returns one child.
    pub fn recombine<G, R>(
        &self,
        parents: &[&Individual<G>],
        rng: &mut R,
    ) -> Result<Vec<Individual<G>>>
    where
        G: RealGene,
        R: Rng + ?Sized,
    {
        log::debug!("{} crossover over {} parents", self.name(), parents.len());
        match *self {
            CrossoverConfig::Point { nb_points } => {
                pairwise(&CrossPoint::new(nb_points), parents, rng)
            }
            CrossoverConfig::UniformF => pairwise(&CrossUniformF, parents, rng),
            CrossoverConfig::ProportionateF { nb_parents } => {
                let child = CrossProportionateF::new(nb_parents).apply_many(parents, rng)?;
                Ok(vec![child])
            }
            CrossoverConfig::Pmx => pairwise(&CrossPMX, parents, rng),
        }
    }

    /// Recombines non-numeric parents with the configured strategy.
    ///
    /// # Errors
    /// [`CrossoverError::NonNumericGenome`] for the blend strategies, which
    /// need real-valued genes.
    pub fn recombine_tokens<G, R>(
        &self,
        parents: &[&Individual<G>],
        rng: &mut R,
    ) -> Result<Vec<Individual<G>>>
    where
        G: Clone + PartialEq,
        R: Rng + ?Sized,
    {
        log::debug!("{} crossover over {} parents", self.name(), parents.len());
        match *self {
            CrossoverConfig::Point { nb_points } => {
                pairwise(&CrossPoint::new(nb_points), parents, rng)
            }
            CrossoverConfig::Pmx => pairwise(&CrossPMX, parents, rng),
            CrossoverConfig::UniformF | CrossoverConfig::ProportionateF { .. } => {
                Err(CrossoverError::NonNumericGenome {
                    operator: self.name(),
                })
            }
        }
    }
}

fn pairwise<G, C, R>(
    op: &C,
    parents: &[&Individual<G>],
    rng: &mut R,
) -> Result<Vec<Individual<G>>>
where
    C: Crossover<G>,
    R: Rng + ?Sized,
{
    match parents {
        [p1, p2] => {
            let (c1, c2) = op.apply(p1, p2, rng)?;
            Ok(vec![c1, c2])
        }
        _ => Err(CrossoverError::ParentCountMismatch {
            expected: 2,
            actual: parents.len(),
        }),
    }
}
