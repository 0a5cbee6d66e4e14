//! Fitness-proportionate selection.
//!
//! # Reference
//! Goldberg (1989), Ch. 1 — roulette wheel sampling

use std::sync::Arc;

use rand::Rng;

use crate::ga::{Individual, Population};

/// Samples parents from one generation's population.
///
/// A strategy is built once per generation; its sampling distribution is
/// fixed for the snapshot's lifetime and unaffected by children produced
/// while it is in use.
pub trait SelectionStrategy<'a>: Sized {
    /// Builds the sampling snapshot for a population.
    fn from_population(population: &'a Population) -> Self;

    /// Draws one individual. `None` only for an empty population.
    fn select<R: Rng>(&self, rng: &mut R) -> Option<&'a Arc<Individual>>;
}

/// Roulette-wheel selection: each individual's share of the wheel is
/// proportional to its fitness.
pub struct RouletteWheel<'a> {
    population: &'a Population,
    fitness_sum: f64,
}

impl<'a> SelectionStrategy<'a> for RouletteWheel<'a> {
    fn from_population(population: &'a Population) -> Self {
        Self {
            population,
            fitness_sum: population.fitness_sum(),
        }
    }

    /// Draws a uniform point on `[0, fitness_sum)` and walks the population
    /// until the accumulated fitness reaches it.
    ///
    /// When the fitness sum is not strictly positive the wheel has no
    /// geometry to sample, so selection falls back to a true-uniform draw.
    /// This cannot happen with the rule-based fitness (its range is
    /// `(0, 1]`) but keeps the wheel well-defined for any future fitness
    /// variant that can emit zero.
    fn select<R: Rng>(&self, rng: &mut R) -> Option<&'a Arc<Individual>> {
        if self.population.is_empty() {
            return None;
        }
        if self.fitness_sum <= 0.0 {
            return self.population.get(rng.random_range(0..self.population.len()));
        }

        let wheel_point = rng.random_range(0.0..self.fitness_sum);
        let mut accumulated = 0.0;
        for individual in self.population.iter() {
            accumulated += individual.fitness;
            if accumulated >= wheel_point {
                return Some(individual);
            }
        }

        // Floating-point shortfall: the walk can end a hair below the sum.
        self.population.get(self.population.len() - 1)
    }
}
