use crate::networks::NetworkError;

use serde::{Deserialize, Serialize};

/// Configuration data for evolving network weights.
///
/// # Note
/// `change_chance` should be in the range [0.0, 1.0],
/// and `weight_bound` positive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeuroevolutionConfig {
    /// Chance that each weight is perturbed during mutation.
    pub change_chance: f64,
    /// Maximum absolute size of a single perturbation.
    pub change_rate: f64,
    /// Weights are kept within `[-weight_bound, weight_bound]`,
    /// and initialized uniformly in that range.
    pub weight_bound: f64,
}

impl NeuroevolutionConfig {
    /// Returns a "zero-valued" default configuration.
    ///
    /// # Note
    /// This value is not suitable for use in most experiments.
    /// It is meant as a way to abbreviate configuration
    /// instantiation.
    ///
    /// # Examples
    /// ```
    /// use darwinian_nn::neuroevolution::NeuroevolutionConfig;
    ///
    /// let config = NeuroevolutionConfig {
    ///     change_chance: 0.2,
    ///     weight_bound: 5.0,
    ///     ..NeuroevolutionConfig::zero()
    /// };
    /// assert_eq!(config.change_rate, 0.0);
    /// ```
    pub const fn zero() -> NeuroevolutionConfig {
        NeuroevolutionConfig {
            change_chance: 0.0,
            change_rate: 0.0,
            weight_bound: 0.0,
        }
    }

    /// Checks that networks can be initialized within the weight bound.
    ///
    /// # Errors
    /// Returns an error if the weight bound is not positive and finite.
    pub fn validate(&self) -> Result<(), NetworkError> {
        let bound = self.weight_bound;
        if !(bound > 0.0 && bound.is_finite()) {
            return Err(NetworkError::InvalidWeightRange {
                min: -bound,
                max: bound,
            });
        }
        Ok(())
    }
}
