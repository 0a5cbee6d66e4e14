//! Generational replacement cycle.
//!
//! One call to [`GenerationStrategy::generate`] replaces a whole population:
//! a roulette-wheel snapshot is built once over the incoming individuals,
//! parent pairs are drawn with replacement, recombined with fused mutation,
//! scored, and appended until the new population has reached the old size.
//! There is no elitism here — a generation's best individual may not
//! survive; the executor compensates by tracking the best ever seen.

use std::sync::Arc;

use rand::Rng;

use crate::codec::Codec;
use crate::ga::{
    Chromosome, CrossoverStrategy, FitnessStrategy, Individual, Lineage, Population,
    RouletteWheel, RuleBasedFitness, SelectionStrategy, SinglePointCrossover, UniformMutation,
};

/// Runs one full selection → crossover → mutation → fitness cycle.
pub struct GenerationStrategy<F = RuleBasedFitness, C = SinglePointCrossover<UniformMutation>> {
    fitness: F,
    crossover: C,
}

impl GenerationStrategy {
    /// Default wiring over a codec: rule-based fitness and single-point
    /// crossover with fused uniform mutation across the codec's gene range.
    ///
    /// The mutation bound saturates at zero for an empty domain, so the
    /// replacement draw range never wraps.
    pub fn new(codec: Arc<Codec>, crossover_probability: f64, mutation_probability: f64) -> Self {
        let max_gene_value = codec.total_combinations().saturating_sub(1);
        let mutation = UniformMutation::new(mutation_probability, max_gene_value);
        Self {
            fitness: RuleBasedFitness::new(codec),
            crossover: SinglePointCrossover::new(crossover_probability, mutation),
        }
    }
}

impl<F: FitnessStrategy, C: CrossoverStrategy> GenerationStrategy<F, C> {
    /// Builds a cycle from explicit strategy objects.
    pub fn with_strategies(fitness: F, crossover: C) -> Self {
        Self { fitness, crossover }
    }

    /// The fitness strategy children are scored with.
    pub fn fitness(&self) -> &F {
        &self.fitness
    }

    /// Produces the next generation.
    ///
    /// The selection wheel is built once up front: children produced
    /// mid-loop never influence the sampling distribution. Parents are
    /// drawn with replacement, so an individual may pair with itself.
    /// Children are appended two at a time until the new population is at
    /// least as large as the input — an odd-sized population therefore
    /// grows by one. An empty population stays empty.
    pub fn generate<R: Rng>(&self, population: &Population, rng: &mut R) -> Population {
        let mut next = Population::with_capacity(population.len() + 1);
        if population.is_empty() {
            return next;
        }

        let wheel = RouletteWheel::from_population(population);
        while next.len() < population.len() {
            let parent1 = wheel.select(rng).unwrap();
            let parent2 = wheel.select(rng).unwrap();

            let (child1, child2, crossover_point) =
                self.crossover
                    .crossover(&parent1.chromosome, &parent2.chromosome, rng);

            for chromosome in [child1, child2] {
                let fitness = self.fitness.compute(&chromosome);
                next.push(Individual::offspring(
                    chromosome,
                    fitness,
                    Lineage {
                        parent1: Arc::clone(parent1),
                        parent2: Arc::clone(parent2),
                        crossover_point,
                    },
                ));
            }
        }

        next
    }
}

/// Builds the initial population for a run.
///
/// Every chromosome has length `codec.total_required_hours()` with each gene
/// drawn uniformly from the valid range; fitness is computed immediately and
/// founders carry no lineage. With zero combinations the genes default to 0
/// (non-decodable, so the requirements penalty takes over).
pub fn initialize_population<F: FitnessStrategy, R: Rng>(
    codec: &Codec,
    population_size: usize,
    fitness: &F,
    rng: &mut R,
) -> Population {
    let chromosome_length = codec.total_required_hours();
    let total_combinations = codec.total_combinations();

    let mut population = Population::with_capacity(population_size);
    for _ in 0..population_size {
        let chromosome: Chromosome = if total_combinations == 0 {
            vec![0; chromosome_length]
        } else {
            (0..chromosome_length)
                .map(|_| rng.random_range(0..total_combinations))
                .collect()
        };
        let fitness_value = fitness.compute(&chromosome);
        population.push(Individual::founder(chromosome, fitness_value));
    }

    population
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Offering, TimeSlot};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_codec() -> Arc<Codec> {
        let slots = vec![
            TimeSlot::new(Day::Monday, "08:00", "09:00"),
            TimeSlot::new(Day::Monday, "09:00", "10:00"),
            TimeSlot::new(Day::Tuesday, "08:00", "09:00"),
        ];
        let offerings = vec![
            Offering::new("GRADE-10-A-MATH", 2),
            Offering::new("GRADE-10-A-SCIENCE", 1),
        ];
        Arc::new(Codec::new(slots, offerings))
    }

    #[test]
    fn test_initialize_population() {
        let codec = sample_codec();
        let fitness = RuleBasedFitness::new(Arc::clone(&codec));
        let mut rng = SmallRng::seed_from_u64(42);

        let population = initialize_population(&codec, 20, &fitness, &mut rng);
        assert_eq!(population.len(), 20);
        for individual in population.iter() {
            assert_eq!(individual.chromosome.len(), 3);
            assert!(individual
                .chromosome
                .iter()
                .all(|&gene| gene < codec.total_combinations()));
            assert!(individual.lineage.is_none());
            assert_eq!(individual.fitness, fitness.compute(&individual.chromosome));
        }
    }

    #[test]
    fn test_initialize_population_empty_domain() {
        let codec = Arc::new(Codec::new(Vec::new(), Vec::new()));
        let fitness = RuleBasedFitness::new(Arc::clone(&codec));
        let mut rng = SmallRng::seed_from_u64(42);

        let population = initialize_population(&codec, 5, &fitness, &mut rng);
        assert_eq!(population.len(), 5);
        for individual in population.iter() {
            assert!(individual.chromosome.is_empty());
            assert_eq!(individual.fitness, 1.0);
        }
    }

    #[test]
    fn test_generate_preserves_even_size() {
        let codec = sample_codec();
        let strategy = GenerationStrategy::new(Arc::clone(&codec), 0.8, 0.3);
        let mut rng = SmallRng::seed_from_u64(42);

        let population = initialize_population(&codec, 10, strategy.fitness(), &mut rng);
        let next = strategy.generate(&population, &mut rng);
        assert_eq!(next.len(), 10);
    }

    #[test]
    fn test_generate_overshoots_odd_size_by_one() {
        let codec = sample_codec();
        let strategy = GenerationStrategy::new(Arc::clone(&codec), 0.8, 0.3);
        let mut rng = SmallRng::seed_from_u64(42);

        let population = initialize_population(&codec, 7, strategy.fitness(), &mut rng);
        let next = strategy.generate(&population, &mut rng);
        assert_eq!(next.len(), 8);
    }

    #[test]
    fn test_generate_on_empty_population() {
        let codec = sample_codec();
        let strategy = GenerationStrategy::new(codec, 0.8, 0.3);
        let mut rng = SmallRng::seed_from_u64(42);

        let next = strategy.generate(&Population::new(), &mut rng);
        assert!(next.is_empty());
    }

    #[test]
    fn test_children_carry_lineage_and_fresh_fitness() {
        let codec = sample_codec();
        let strategy = GenerationStrategy::new(Arc::clone(&codec), 0.8, 0.3);
        let mut rng = SmallRng::seed_from_u64(42);

        let population = initialize_population(&codec, 6, strategy.fitness(), &mut rng);
        let next = strategy.generate(&population, &mut rng);

        for child in next.iter() {
            let lineage = child.lineage.as_ref().expect("children have parents");
            assert!(population
                .iter()
                .any(|member| Arc::ptr_eq(member, &lineage.parent1)));
            assert!(population
                .iter()
                .any(|member| Arc::ptr_eq(member, &lineage.parent2)));
            assert!(lineage.crossover_point <= child.chromosome.len());
            // Cached fitness matches a recomputation: evaluation is pure.
            assert_eq!(child.fitness, strategy.fitness().compute(&child.chromosome));
        }
    }

    #[test]
    fn test_generate_keeps_chromosome_length() {
        let codec = sample_codec();
        let strategy = GenerationStrategy::new(Arc::clone(&codec), 1.0, 1.0);
        let mut rng = SmallRng::seed_from_u64(7);

        let mut population = initialize_population(&codec, 8, strategy.fitness(), &mut rng);
        for _ in 0..5 {
            population = strategy.generate(&population, &mut rng);
            assert!(population
                .iter()
                .all(|individual| individual.chromosome.len() == 3));
        }
    }

    #[test]
    fn test_mutated_genes_stay_in_valid_range() {
        let codec = sample_codec();
        let strategy = GenerationStrategy::new(Arc::clone(&codec), 1.0, 1.0);
        let mut rng = SmallRng::seed_from_u64(7);

        let population = initialize_population(&codec, 10, strategy.fitness(), &mut rng);
        let next = strategy.generate(&population, &mut rng);
        for individual in next.iter() {
            assert!(individual
                .chromosome
                .iter()
                .all(|&gene| gene < codec.total_combinations()));
        }
    }
}
