//! Run loop for the evolutionary search.
//!
//! The executor owns the codec and the generational cycle, runs a fixed
//! number of generations, and returns the best individual seen across the
//! whole run — not the best of the final generation, since generational
//! replacement without elitism can lose it.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::codec::Codec;
use crate::ga::{initialize_population, GenerationStrategy, Individual};
use crate::models::{Offering, TimeSlot};

/// Run parameters for the evolutionary search.
///
/// Defaults: population 100, 50 generations, 0.8 crossover and 0.3
/// mutation probability.
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of candidate schedules kept per generation.
    pub population_size: usize,
    /// Number of generational cycles to run; the only stop condition.
    pub max_generations: usize,
    /// Probability that a parent pair recombines.
    pub crossover_probability: f64,
    /// Per-gene probability of random replacement.
    pub mutation_probability: f64,
    /// Seed for the run's random generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 50,
            crossover_probability: 0.8,
            mutation_probability: 0.3,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the crossover probability, clamped to `[0, 1]`.
    pub fn with_crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Fixes the random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Orchestrates the evolutionary search over a slot/offering domain.
///
/// # Example
/// ```
/// use timetable_evo::executor::{Executor, GaConfig};
/// use timetable_evo::models::{Day, Offering, TimeSlot};
///
/// let slots = vec![TimeSlot::new(Day::Monday, "08:00", "08:45")];
/// let offerings = vec![Offering::new("MATH-GRADE1-A", 1)];
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(10)
///     .with_seed(42);
/// let executor = Executor::new(slots, offerings, config);
///
/// let best = executor.run().expect("non-empty population");
/// assert_eq!(best.fitness, 1.0);
/// ```
pub struct Executor {
    codec: Arc<Codec>,
    config: GaConfig,
    generation: GenerationStrategy,
}

impl Executor {
    /// Creates an executor over the given scheduling domain.
    pub fn new(slots: Vec<TimeSlot>, offerings: Vec<Offering>, config: GaConfig) -> Self {
        let codec = Arc::new(Codec::new(slots, offerings));
        let generation = GenerationStrategy::new(
            Arc::clone(&codec),
            config.crossover_probability,
            config.mutation_probability,
        );
        Self {
            codec,
            config,
            generation,
        }
    }

    /// The codec fixing this run's gene ↔ assignment mapping; use it to
    /// decode the winner's chromosome.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// The run parameters.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the search with a generator built from the configured seed
    /// (or OS entropy when unseeded).
    pub fn run(&self) -> Option<Arc<Individual>> {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.run_with(&mut rng)
    }

    /// Runs the search with an explicit random generator.
    ///
    /// Initializes the population, then runs exactly `max_generations`
    /// cycles, keeping the individual with the strictly best fitness seen
    /// anywhere in the run. Degenerate domains still run to completion:
    /// with no offerings every chromosome is empty and scores 1.0; with
    /// offerings but no slots the requirements penalty dominates and the
    /// best score stays near zero. Returns `None` only when the configured
    /// population size is zero.
    pub fn run_with<R: Rng>(&self, rng: &mut R) -> Option<Arc<Individual>> {
        let mut population = initialize_population(
            &self.codec,
            self.config.population_size,
            self.generation.fitness(),
            rng,
        );
        let mut best = Arc::clone(population.best()?);

        for _ in 0..self.config.max_generations {
            population = self.generation.generate(&population, rng);
            if let Some(candidate) = population.best() {
                if candidate.fitness > best.fitness {
                    best = Arc::clone(candidate);
                }
            }
        }

        Some(best)
    }
}
