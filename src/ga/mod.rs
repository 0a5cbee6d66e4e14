//! Evolutionary engine: chromosome model and genetic operators.
//!
//! The engine treats a timetable as a fixed-length vector of integer genes
//! and searches by generational replacement. Strategy families are trait
//! seams fixed at construction — one shipped variant each, open for more
//! (tournament selection, two-point crossover, ...):
//!
//! - [`FitnessStrategy`] — [`RuleBasedFitness`]: duplicates + unmet-hours
//!   hard constraints
//! - [`SelectionStrategy`] — [`RouletteWheel`]: fitness-proportionate
//! - [`CrossoverStrategy`] — [`SinglePointCrossover`]: one cut, fused
//!   per-gene mutation
//! - [`MutationStrategy`] — [`UniformMutation`]: random gene replacement
//!
//! All randomness flows through an injected [`rand::Rng`], so a seeded
//! generator reproduces a run exactly.
//!
//! # Reference
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"
//! - Colorni, Dorigo, Maniezzo (1991), "Genetic Algorithms and Highly
//!   Constrained Problems: The Time-Table Case"

mod crossover;
mod fitness;
mod generation;
mod individual;
mod mutation;
mod select;

pub use crossover::{CrossoverStrategy, SinglePointCrossover};
pub use fitness::{
    DuplicatesConstraint, FitnessStrategy, RequirementsConstraint, RuleBasedFitness,
};
pub use generation::{initialize_population, GenerationStrategy};
pub use individual::{Allele, Chromosome, Individual, Lineage, Population};
pub use mutation::{MutationStrategy, UniformMutation};
pub use select::{RouletteWheel, SelectionStrategy};
