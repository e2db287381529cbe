use serde::{Deserialize, Serialize};

/// Length of the per-epoch error sequence returned
/// when training stops before `max_epochs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EpochErrors {
    /// Only epochs actually run are reported.
    #[default]
    Truncate,
    /// The sequence is padded with zeros up to `max_epochs`.
    ZeroPad,
}

/// Configuration data for back-propagation training.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Step size of every weight update.
    pub learning_rate: f64,
    /// Maximum number of passes over the training set.
    pub max_epochs: usize,
    #[serde(default)]
    pub epoch_errors: EpochErrors,
}

impl TrainingConfig {
    /// Returns a "zero-valued" default configuration.
    /// All values are 0, and errors are truncated.
    ///
    /// # Examples
    /// ```
    /// use darwinian_nn::networks::TrainingConfig;
    ///
    /// let config = TrainingConfig {
    ///     learning_rate: 20.0,
    ///     max_epochs: 2000,
    ///     ..TrainingConfig::zero()
    /// };
    /// ```
    pub const fn zero() -> TrainingConfig {
        TrainingConfig {
            learning_rate: 0.0,
            max_epochs: 0,
            epoch_errors: EpochErrors::Truncate,
        }
    }
}
