//! Selection strategies choose which members of a
//! population get to become parents of the next generation.
//!
//! Three strategies are supplied:
//! - [`SelectionTournament`]: small random tournaments with
//!   rank-decaying winning chances.
//! - [`SelectionTruncate`]: only the top fraction of the population
//!   reproduces.
//! - [`SelectionRoulette`]: fitness-proportional selection.
mod errors;
mod roulette;
mod tournament;
mod truncate;

use crate::Member;
pub use errors::SelectionError;
pub use roulette::SelectionRoulette;
pub use tournament::SelectionTournament;
pub use truncate::SelectionTruncate;

use rand::Rng;

/// An interface for parent selection.
pub trait SelectionStrategy {
    /// Returns `members_to_select` members of `population`,
    /// which will act as parents during recombination.
    /// The same member may be returned more than once.
    ///
    /// Populations handed over by the [`EvolutionaryAlgorithm`]
    /// are always sorted by decreasing fitness.
    ///
    /// # Errors
    /// Returns an error if the population is empty, or the
    /// strategy cannot be applied to a population of its size.
    ///
    /// [`EvolutionaryAlgorithm`]: crate::EvolutionaryAlgorithm
    fn select<'p, M, R>(
        &self,
        population: &'p [Member<M>],
        members_to_select: usize,
        rng: &mut R,
    ) -> Result<Vec<&'p Member<M>>, SelectionError>
    where
        R: Rng + ?Sized;
}
