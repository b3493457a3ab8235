//! Error types shared by all crossover operators.

use thiserror::Error;

/// Failure reported by a crossover operator or one of its helpers.
///
/// Every variant is a contract violation detected before any offspring is
/// returned. Operators never retry and never hand back partial offspring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrossoverError {
    #[error("genome length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("cannot draw {requested} distinct values from a range of {available}")]
    NotEnoughPositions { requested: usize, available: usize },

    #[error("{operator} needs a genome of at least {minimum} genes, got {length}")]
    GenomeTooShort {
        operator: &'static str,
        length: usize,
        minimum: usize,
    },

    #[error("at least {minimum} parents are required, got {actual}")]
    NotEnoughParents { minimum: usize, actual: usize },

    #[error("expected {expected} parents, got {actual}")]
    ParentCountMismatch { expected: usize, actual: usize },

    #[error("{operator} only works on real-valued genomes")]
    NonNumericGenome { operator: &'static str },

    #[error("gene value not found in genome")]
    ValueNotFound,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CrossoverError>;
