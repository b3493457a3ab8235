//! Candidate solutions and gene lookup.
//!
//! An [`Individual`] is a fixed-length gene sequence plus a cached fitness.
//! Offspring produced by crossover always start with invalid fitness so the
//! surrounding GA knows to re-evaluate them.

use crate::error::{CrossoverError, Result};

/// A candidate solution: an ordered gene sequence and its cached fitness.
///
/// The gene type `G` is generic. Blend crossovers require real-valued genes
/// (see [`RealGene`](crate::crossover::RealGene)); permutation crossovers
/// only need `Clone + PartialEq`.
///
/// # Examples
///
/// ```
/// use u_crossover::Individual;
///
/// let mut ind = Individual::new(vec![3, 1, 2]);
/// assert!(!ind.fitness_valid);
///
/// ind.set_fitness(12.5);
/// assert!(ind.fitness_valid);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual<G> {
    /// Gene values. Length is fixed for a given problem instance.
    pub genome: Vec<G>,

    /// Last computed fitness. Lower is better.
    ///
    /// Meaningless while [`fitness_valid`](Self::fitness_valid) is `false`.
    pub fitness: f64,

    /// Whether [`fitness`](Self::fitness) reflects the current genome.
    pub fitness_valid: bool,
}

impl<G> Individual<G> {
    /// Wraps a genome in a fresh individual with invalid fitness.
    pub fn new(genome: Vec<G>) -> Self {
        Self {
            genome,
            fitness: f64::INFINITY,
            fitness_valid: false,
        }
    }

    /// Allocates an individual of exactly `length` genes, filling slot `i`
    /// with `gene(i)`.
    pub fn from_fn<F>(length: usize, gene: F) -> Self
    where
        F: FnMut(usize) -> G,
    {
        Self::new((0..length).map(gene).collect())
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genome.len()
    }

    /// Returns `true` if the genome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }

    /// Gene values as a slice.
    pub fn genome(&self) -> &[G] {
        &self.genome
    }

    /// Consumes the individual and returns its genome.
    pub fn into_genome(self) -> Vec<G> {
        self.genome
    }

    /// Stores an evaluated fitness and marks it valid.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
        self.fitness_valid = true;
    }

    /// Marks the cached fitness as stale.
    ///
    /// Call after mutating the genome in place.
    pub fn invalidate(&mut self) {
        self.fitness_valid = false;
    }
}

impl<G> From<Vec<G>> for Individual<G> {
    fn from(genome: Vec<G>) -> Self {
        Self::new(genome)
    }
}

/// Returns the position of the first element of `sequence` equal to `value`.
///
/// Ties (duplicate values) resolve to the lowest index.
///
/// # Errors
/// [`CrossoverError::ValueNotFound`] if no element matches.
///
/// # Complexity
/// O(n)
pub fn get_index<G: PartialEq>(value: &G, sequence: &[G]) -> Result<usize> {
    sequence
        .iter()
        .position(|g| g == value)
        .ok_or(CrossoverError::ValueNotFound)
}

/// Checks that every parent has the same genome length as the first.
///
/// Returns the shared length.
pub(crate) fn common_length<G>(parents: &[&Individual<G>]) -> Result<usize> {
    let expected = parents.first().map_or(0, |p| p.len());
    for parent in parents {
        if parent.len() != expected {
            return Err(CrossoverError::LengthMismatch {
                expected,
                actual: parent.len(),
            });
        }
    }
    Ok(expected)
}
