//! Domain-agnostic crossover operators for genetic algorithms.
//!
//! Provides the recombination stage of an evolutionary optimizer:
//!
//! - **N-point crossover** ([`crossover::CrossPoint`]): segment exchange on
//!   any gene type; one- and two-point crossover are special cases.
//! - **Uniform blend** ([`crossover::CrossUniformF`]): per-gene random convex
//!   combination of two real-valued parents.
//! - **Proportionate blend** ([`crossover::CrossProportionateF`]): weighted
//!   combination of any number of real-valued parents.
//! - **PMX** ([`crossover::CrossPMX`]): partially mapped crossover that keeps
//!   permutation genomes valid.
//!
//! # Architecture
//!
//! Population management, selection, evaluation and mutation are left to the
//! caller. Operators take parents by reference and a caller-owned random
//! source, and return freshly allocated offspring with invalid fitness.
//! Failures are reported through [`CrossoverError`].
//!
//! # Features
//!
//! - `serde`: serialization for [`Individual`] and
//!   [`crossover::CrossoverConfig`]
//! - `parallel`: rayon-backed [`crossover::cross_pairs`]

pub mod crossover;
pub mod error;
pub mod genome;
pub mod random;

pub use error::{CrossoverError, Result};
pub use genome::{get_index, Individual};
pub use random::{create_rng, random_ints};
