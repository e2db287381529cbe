use super::EvolutionError;

use serde::{Deserialize, Serialize};

use std::num::NonZeroUsize;

/// Configuration data for an [`EvolutionaryAlgorithm`].
///
/// [`EvolutionaryAlgorithm`]: crate::EvolutionaryAlgorithm
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Size of the population, re-established every generation.
    pub population_size: NonZeroUsize,
    /// Top n of the population which is copied
    /// as-is to the next generation. Must be
    /// smaller than the population size.
    pub elite_count: usize,
}

impl EvolutionConfig {
    /// Returns a "zero-valued" default configuration.
    /// The population size is 1 and there are no elites.
    ///
    /// # Note
    /// This value is not suitable for use in most experiments.
    /// It is meant as a way to abbreviate configuration
    /// instantiation.
    ///
    /// # Examples
    /// ```
    /// use darwinian::EvolutionConfig;
    /// use std::num::NonZeroUsize;
    ///
    /// let config = EvolutionConfig {
    ///     population_size: NonZeroUsize::new(100).unwrap(),
    ///     ..EvolutionConfig::zero()
    /// };
    /// assert_eq!(config.elite_count, 0);
    /// ```
    pub const fn zero() -> EvolutionConfig {
        EvolutionConfig {
            population_size: NonZeroUsize::MIN,
            elite_count: 0,
        }
    }

    /// Returns the number of parents selected each generation:
    /// every non-elite slot, rounded up to an even number
    /// so that parents can be paired.
    ///
    /// # Examples
    /// ```
    /// use darwinian::EvolutionConfig;
    /// use std::num::NonZeroUsize;
    ///
    /// let config = EvolutionConfig {
    ///     population_size: NonZeroUsize::new(10).unwrap(),
    ///     elite_count: 1,
    /// };
    /// assert_eq!(config.selectees_count(), 10);
    /// ```
    pub fn selectees_count(&self) -> usize {
        let non_elites = self.population_size.get().saturating_sub(self.elite_count);
        non_elites + non_elites % 2
    }

    /// Checks that the configuration can drive a run.
    ///
    /// # Errors
    /// Returns an error if the elite count is not
    /// smaller than the population size.
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if self.elite_count >= self.population_size.get() {
            return Err(EvolutionError::EliteCountTooLarge {
                elite_count: self.elite_count,
                population_size: self.population_size.get(),
            });
        }
        Ok(())
    }
}
