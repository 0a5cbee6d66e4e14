//! Chromosome, individual, and population model.
//!
//! A candidate schedule is a fixed-length vector of integer genes; every
//! gene may decode to any (slot, offering) pair, so no position is bound to
//! a particular offering. Individuals are immutable once constructed and
//! shared via `Arc`, which makes population snapshots safe to read from
//! anywhere and keeps parent references cheap.

use std::sync::Arc;

/// One integer gene encoding a (slot, offering) assignment.
pub type Allele = usize;

/// An ordered vector of alleles representing one candidate schedule.
pub type Chromosome = Vec<Allele>;

/// Immediate ancestry of a crossover-produced individual.
///
/// Only one level is stored and nothing in the crate traverses deeper;
/// ancestry beyond the parents is released as soon as the grandparent
/// generation's population is dropped and no sibling still links to it.
#[derive(Debug, Clone)]
pub struct Lineage {
    /// First selected parent.
    pub parent1: Arc<Individual>,
    /// Second selected parent (may be the same individual as the first).
    pub parent2: Arc<Individual>,
    /// Cut position used to recombine the parents. A value equal to the
    /// chromosome length records that the pair skipped recombination and
    /// each child copied its respective parent (mutation still applied).
    pub crossover_point: usize,
}

/// A candidate schedule with its cached fitness and ancestry.
///
/// Immutable once constructed; the fitness is computed exactly once, at
/// construction time, and never recomputed.
#[derive(Debug, Clone)]
pub struct Individual {
    /// Genetic representation of the schedule.
    pub chromosome: Chromosome,
    /// Cached fitness in `(0, 1]`; higher is better.
    pub fitness: f64,
    /// Parents and crossover point; `None` for initial-population founders.
    pub lineage: Option<Lineage>,
}

impl Individual {
    /// Creates an initial-population individual with no ancestry.
    pub fn founder(chromosome: Chromosome, fitness: f64) -> Self {
        Self {
            chromosome,
            fitness,
            lineage: None,
        }
    }

    /// Creates a reproduction-produced individual.
    pub fn offspring(chromosome: Chromosome, fitness: f64, lineage: Lineage) -> Self {
        Self {
            chromosome,
            fitness,
            lineage: Some(lineage),
        }
    }

    /// Crossover cut position, if this individual was produced by
    /// recombination that actually cut. `None` for founders and for
    /// children whose parent pair skipped recombination.
    pub fn crossover_point(&self) -> Option<usize> {
        self.lineage
            .as_ref()
            .map(|l| l.crossover_point)
            .filter(|&point| point < self.chromosome.len())
    }
}

/// The set of individuals alive in one generation.
///
/// Ordered; the nominal size is fixed by construction, but a generational
/// replacement may overshoot the target by one when the target is odd.
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Arc<Individual>>,
}

impl Population {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty population with reserved capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Appends an individual.
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(Arc::new(individual));
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The individual at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Arc<Individual>> {
        self.individuals.get(index)
    }

    /// Iterates over the individuals in order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Individual>> {
        self.individuals.iter()
    }

    /// The highest-fitness individual; earliest wins ties.
    pub fn best(&self) -> Option<&Arc<Individual>> {
        self.individuals.iter().fold(None, |best, candidate| match best {
            Some(current) if candidate.fitness > current.fitness => Some(candidate),
            None => Some(candidate),
            _ => best,
        })
    }

    /// Sum of all fitness values.
    pub fn fitness_sum(&self) -> f64 {
        self.individuals.iter().map(|i| i.fitness).sum()
    }
}
