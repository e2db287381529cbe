use crate::selection::SelectionError;

use std::error::Error;
use std::fmt;

/// An error type indicating a misconfigured or
/// unexpectedly degenerate evolutionary run.
#[derive(Debug, Clone, PartialEq)]
pub enum EvolutionError {
    /// `run` was called before a stop condition was set.
    MissingStopCondition,
    /// There must be at least one non-elite slot in the population.
    EliteCountTooLarge {
        elite_count: usize,
        population_size: usize,
    },
    /// Recombination produced too few children to refill the population.
    InsufficientOffspring { expected: usize, produced: usize },
    /// The selection strategy rejected the population.
    Selection(SelectionError),
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStopCondition => write!(
                f,
                "evolutionary algorithm not configured: missing stop condition"
            ),
            Self::EliteCountTooLarge {
                elite_count,
                population_size,
            } => write!(
                f,
                "elite count {} must be smaller than population size {}",
                elite_count, population_size
            ),
            Self::InsufficientOffspring { expected, produced } => write!(
                f,
                "crossover produced {} children, at least {} needed",
                produced, expected
            ),
            Self::Selection(e) => write!(f, "parent selection failed: {}", e),
        }
    }
}

impl Error for EvolutionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Selection(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SelectionError> for EvolutionError {
    fn from(e: SelectionError) -> Self {
        Self::Selection(e)
    }
}
