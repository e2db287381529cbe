use std::error::Error;
use std::fmt;

/// An error type indicating an invalid selection
/// strategy configuration or selection request.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// Selection was attempted on an empty population.
    EmptyPopulation,
    /// The tournament needs more distinct contenders
    /// than the population holds.
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },
    /// A tournament must have at least one contender.
    InvalidTournamentSize,
    /// The winning probability must be in (0, 1].
    InvalidProbability(f64),
    /// The truncation fraction must be in (0, 1].
    InvalidFraction(f64),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPopulation => write!(f, "attempted selection on empty population"),
            Self::TournamentTooLarge {
                tournament_size,
                population_size,
            } => write!(
                f,
                "tournament of size {} exceeds population of size {}",
                tournament_size, population_size
            ),
            Self::InvalidTournamentSize => write!(f, "tournament size must be at least 1"),
            Self::InvalidProbability(p) => {
                write!(f, "tournament probability {} is not in (0, 1]", p)
            }
            Self::InvalidFraction(fraction) => {
                write!(f, "truncation fraction {} is not in (0, 1]", fraction)
            }
        }
    }
}

impl Error for SelectionError {}
