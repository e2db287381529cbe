use super::{SelectionError, SelectionStrategy};
use crate::Member;

use rand::seq::SliceRandom;
use rand::Rng;

/// Truncation selection.
///
/// Only the top `fraction` of the population (at least one member)
/// may reproduce. Selectees are taken from them in turn, then shuffled
/// so that parent pairs are not always formed by neighbours.
///
/// Relies on the population being sorted by decreasing fitness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionTruncate {
    fraction: f64,
}

impl SelectionTruncate {
    /// Creates a new truncation strategy keeping the
    /// specified fraction of the population.
    ///
    /// # Errors
    /// Returns an error if `fraction` is not in the range (0, 1].
    ///
    /// # Examples
    /// ```
    /// use darwinian::SelectionTruncate;
    ///
    /// assert!(SelectionTruncate::new(0.05).is_ok());
    /// assert!(SelectionTruncate::new(0.0).is_err());
    /// ```
    pub fn new(fraction: f64) -> Result<SelectionTruncate, SelectionError> {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(SelectionError::InvalidFraction(fraction));
        }
        Ok(SelectionTruncate { fraction })
    }

    /// Returns the fraction of the population allowed to reproduce.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}

impl SelectionStrategy for SelectionTruncate {
    fn select<'p, M, R>(
        &self,
        population: &'p [Member<M>],
        members_to_select: usize,
        rng: &mut R,
    ) -> Result<Vec<&'p Member<M>>, SelectionError>
    where
        R: Rng + ?Sized,
    {
        if population.is_empty() {
            return Err(SelectionError::EmptyPopulation);
        }
        let survivors = ((population.len() as f64 * self.fraction) as usize).max(1);
        let mut selectees: Vec<&Member<M>> = (0..members_to_select)
            .map(|i| &population[i % survivors])
            .collect();
        selectees.shuffle(rng);
        Ok(selectees)
    }
}
