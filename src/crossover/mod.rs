//! Crossover operators.
//!
//! Crossover recombines the genetic material of two or more parents into new
//! offspring. Every strategy here is stateless apart from its parameters and
//! takes its randomness from the caller, so a seeded random source
//! reproduces the same children.
//!
//! # Core Traits
//!
//! - [`Crossover`]: two parents in, two children out
//! - [`MultiParentCrossover`]: any number of parents in, one child out
//! - [`RealGene`]: real-valued genes required by blend strategies
//!
//! # Strategies
//!
//! | Operator | Genes | Parents → children |
//! |---|---|---|
//! | [`CrossPoint`] | any `Clone` | 2 → 2 |
//! | [`CrossUniformF`] | [`RealGene`] | 2 → 2 |
//! | [`CrossProportionateF`] | [`RealGene`] | k → 1 |
//! | [`CrossPMX`] | `Clone + PartialEq` permutation | 2 → 2 |
//!
//! [`CrossoverConfig`] selects one of them at construction time, and
//! [`cross_pairs`] applies a pairwise operator to a whole mating pool.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, ch. 4

mod batch;
mod blend;
mod config;
mod pmx;
mod point;
mod types;

pub use batch::{cross_pairs, Offspring};
pub use blend::{CrossProportionateF, CrossUniformF};
pub use config::CrossoverConfig;
pub use pmx::CrossPMX;
pub use point::CrossPoint;
pub use types::{Crossover, MultiParentCrossover, RealGene};
