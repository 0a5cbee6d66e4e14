//! Gene mutation.

use rand::Rng;

use crate::ga::Allele;

/// Per-gene stochastic rewrite. Pure with respect to the configured
/// parameters and the generator's state.
pub trait MutationStrategy {
    /// Returns the (possibly) mutated allele.
    fn mutate<R: Rng>(&self, allele: Allele, rng: &mut R) -> Allele;
}

/// Uniform random replacement.
///
/// With the configured probability the allele is replaced by a uniform draw
/// from `[0, max_value]` (inclusive); otherwise it passes through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct UniformMutation {
    probability: f64,
    max_value: Allele,
}

impl UniformMutation {
    /// Creates the operator. The probability is clamped to `[0, 1]`.
    pub fn new(probability: f64, max_value: Allele) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            max_value,
        }
    }

    /// Inclusive upper bound of the replacement draw.
    pub fn max_value(&self) -> Allele {
        self.max_value
    }
}

impl MutationStrategy for UniformMutation {
    fn mutate<R: Rng>(&self, allele: Allele, rng: &mut R) -> Allele {
        if rng.random_bool(self.probability) {
            rng.random_range(0..=self.max_value)
        } else {
            allele
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_probability_never_mutates() {
        let mutation = UniformMutation::new(0.0, 100);
        let mut rng = SmallRng::seed_from_u64(42);
        for allele in 0..200 {
            assert_eq!(mutation.mutate(allele, &mut rng), allele);
        }
    }

    #[test]
    fn test_full_probability_stays_in_bounds() {
        let mutation = UniformMutation::new(1.0, 9);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let mutated = mutation.mutate(1_000_000, &mut rng);
            assert!(mutated <= 9);
        }
    }

    #[test]
    fn test_full_probability_covers_range() {
        let mutation = UniformMutation::new(1.0, 3);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[mutation.mutate(0, &mut rng)] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_zero_max_value_draw_is_safe() {
        // Degenerate one-value domain: the draw range collapses to [0, 0].
        let mutation = UniformMutation::new(1.0, 0);
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(mutation.mutate(7, &mut rng), 0);
    }

    #[test]
    fn test_probability_is_clamped() {
        let mutation = UniformMutation::new(1.5, 5);
        let mut rng = SmallRng::seed_from_u64(42);
        // Would panic inside rand if the probability were passed unclamped.
        let mutated = mutation.mutate(99, &mut rng);
        assert!(mutated <= 5);

        let inert = UniformMutation::new(-0.5, 5);
        assert_eq!(inert.mutate(99, &mut rng), 99);
    }
}
