//! Single-point recombination with fused mutation.
//!
//! Crossover and mutation are one pass: every gene of every child, whichever
//! parent it came from, goes through the mutation strategy on its way into
//! the child chromosome. This keeps the generational loop to a single walk
//! over each chromosome.

use rand::Rng;

use crate::ga::{Allele, Chromosome, MutationStrategy};

/// Recombines two equal-length parents into two children.
pub trait CrossoverStrategy {
    /// Produces `(child1, child2, crossover_point)`.
    ///
    /// A returned point equal to the chromosome length means no
    /// recombination took place and each child derives from one parent.
    ///
    /// # Panics
    /// Panics if the parents' lengths differ; equal lengths are a caller
    /// contract (the generational loop only ever breeds within one
    /// population, where all chromosomes share a length).
    fn crossover<R: Rng>(
        &self,
        parent1: &[Allele],
        parent2: &[Allele],
        rng: &mut R,
    ) -> (Chromosome, Chromosome, usize);
}

/// Single-point crossover with a per-gene mutation pass.
///
/// With the configured probability, a cut position is drawn uniformly from
/// `0..length` — a draw of 0 swaps the parents wholesale, which a length-1
/// chromosome can still hit. Without a cut the children copy their
/// respective parents. Either way every gene is mutated on placement.
#[derive(Debug, Clone)]
pub struct SinglePointCrossover<M> {
    probability: f64,
    mutation: M,
}

impl<M: MutationStrategy> SinglePointCrossover<M> {
    /// Creates the operator. The probability is clamped to `[0, 1]`.
    pub fn new(probability: f64, mutation: M) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            mutation,
        }
    }
}

impl<M: MutationStrategy> CrossoverStrategy for SinglePointCrossover<M> {
    fn crossover<R: Rng>(
        &self,
        parent1: &[Allele],
        parent2: &[Allele],
        rng: &mut R,
    ) -> (Chromosome, Chromosome, usize) {
        assert_eq!(
            parent1.len(),
            parent2.len(),
            "crossover parents must have equal chromosome lengths"
        );

        let length = parent1.len();
        let mut crossover_point = length;
        if length > 0 && rng.random_bool(self.probability) {
            crossover_point = rng.random_range(0..length);
        }

        let mut child1 = Chromosome::with_capacity(length);
        let mut child2 = Chromosome::with_capacity(length);

        for i in 0..crossover_point {
            child1.push(self.mutation.mutate(parent1[i], rng));
            child2.push(self.mutation.mutate(parent2[i], rng));
        }
        for i in crossover_point..length {
            child1.push(self.mutation.mutate(parent2[i], rng));
            child2.push(self.mutation.mutate(parent1[i], rng));
        }

        (child1, child2, crossover_point)
    }
}
