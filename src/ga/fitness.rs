//! Rule-based fitness evaluation.
//!
//! Scores a chromosome by counting weighted hard-constraint violations and
//! mapping the accumulated penalty into `(0, 1]`:
//!
//! ```text
//! fitness = 1 / (1 + 1000·(duplicates² + unmet_hours²) + soft_penalty)
//! ```
//!
//! The quadratic terms make the score fall off steeply as violations pile
//! up, while any single violation already pushes it below 1/1001. A fitness
//! of exactly 1.0 means both hard constraints are fully satisfied.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning", Ch. 3 (penalty methods)

use std::collections::HashMap;
use std::sync::Arc;

use crate::codec::Codec;
use crate::ga::Allele;

/// Weight applied to the quadratic hard-constraint penalty.
const HARD_CONSTRAINT_WEIGHT: f64 = 1000.0;

/// Scores a chromosome. Implementations must be pure: the same chromosome
/// content always yields the same score.
pub trait FitnessStrategy {
    /// Computes the fitness of a chromosome, in `(0, 1]`.
    fn compute(&self, chromosome: &[Allele]) -> f64;
}

/// Counts repeated gene values.
///
/// Because the codec is bijective, equal genes mean the exact same
/// (slot, offering) assignment, so every repetition beyond the first is a
/// wasted hour. Two *different* offerings sharing the same slot are not
/// flagged — offerings may legitimately share a slot (e.g. co-located
/// groups), so slot exclusivity is not a constraint here.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicatesConstraint;

impl DuplicatesConstraint {
    /// Sum over distinct gene values of `occurrences − 1`.
    pub fn compute(&self, chromosome: &[Allele]) -> usize {
        let mut frequency: HashMap<Allele, usize> = HashMap::new();
        for &allele in chromosome {
            *frequency.entry(allele).or_insert(0) += 1;
        }

        frequency.values().map(|&count| count - 1).sum()
    }
}

/// Counts unmet required hours per offering.
///
/// Each successfully decoded gene credits one hour to its offering's key;
/// non-decodable genes credit no offering, so an out-of-range gene shows up
/// here as a missing hour rather than as an error.
#[derive(Debug, Clone)]
pub struct RequirementsConstraint {
    codec: Arc<Codec>,
}

impl RequirementsConstraint {
    /// Creates the constraint over the codec's offerings.
    pub fn new(codec: Arc<Codec>) -> Self {
        Self { codec }
    }

    /// Sum over offerings of `max(0, required_hours − assigned_hours)`.
    pub fn compute(&self, chromosome: &[Allele]) -> usize {
        let mut assigned_hours: HashMap<&str, u32> = HashMap::new();
        for &allele in chromosome {
            if let Some(assignment) = self.codec.decode(allele) {
                *assigned_hours
                    .entry(assignment.offering.key.as_str())
                    .or_insert(0) += 1;
            }
        }

        self.codec
            .offerings()
            .iter()
            .map(|offering| {
                let assigned = assigned_hours
                    .get(offering.key.as_str())
                    .copied()
                    .unwrap_or(0);
                offering.required_hours.saturating_sub(assigned) as usize
            })
            .sum()
    }
}

/// Hard-constraint fitness over duplicates and unmet requirements.
#[derive(Debug, Clone)]
pub struct RuleBasedFitness {
    duplicates_constraint: DuplicatesConstraint,
    requirements_constraint: RequirementsConstraint,
}

impl RuleBasedFitness {
    /// Creates the evaluator for the given codec.
    pub fn new(codec: Arc<Codec>) -> Self {
        Self {
            duplicates_constraint: DuplicatesConstraint,
            requirements_constraint: RequirementsConstraint::new(codec),
        }
    }
}

impl FitnessStrategy for RuleBasedFitness {
    fn compute(&self, chromosome: &[Allele]) -> f64 {
        let duplicates = self.duplicates_constraint.compute(chromosome) as f64;
        let unmet_requirements = self.requirements_constraint.compute(chromosome) as f64;

        let hard_penalty =
            HARD_CONSTRAINT_WEIGHT * (duplicates * duplicates + unmet_requirements * unmet_requirements);
        // Soft constraints are not wired in yet; the term stays at zero so
        // the formula already has the slot for them.
        let soft_penalty = 0.0;

        1.0 / (1.0 + hard_penalty + soft_penalty)
    }
}
