use super::{SelectionError, SelectionStrategy};
use crate::member::descending;
use crate::Member;

use rand::seq::index;
use rand::Rng;

/// Tournament selection.
///
/// For each selectee, `tournament_size` distinct contenders
/// are drawn at random and ranked by fitness. The best contender
/// wins with chance `p`; failing that the second wins with chance
/// `p`, and so on, so that rank `k` wins with probability
/// `p·(1-p)^k`. The last rank takes whatever probability is left.
///
/// Selection pressure grows with both the tournament size and `p`.
/// With `p = 1` the best contender always wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionTournament {
    tournament_size: usize,
    p: f64,
}

impl SelectionTournament {
    /// Creates a new tournament strategy.
    ///
    /// # Errors
    /// Returns an error if `tournament_size` is 0, or
    /// `p` is not in the range (0, 1].
    ///
    /// # Examples
    /// ```
    /// use darwinian::SelectionTournament;
    ///
    /// let tournament = SelectionTournament::new(14, 0.8).unwrap();
    /// assert_eq!(tournament.tournament_size(), 14);
    ///
    /// assert!(SelectionTournament::new(0, 0.8).is_err());
    /// assert!(SelectionTournament::new(14, 0.0).is_err());
    /// ```
    pub fn new(tournament_size: usize, p: f64) -> Result<SelectionTournament, SelectionError> {
        if tournament_size == 0 {
            return Err(SelectionError::InvalidTournamentSize);
        }
        if !(p > 0.0 && p <= 1.0) {
            return Err(SelectionError::InvalidProbability(p));
        }
        Ok(SelectionTournament { tournament_size, p })
    }

    /// Returns the number of contenders per tournament.
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Returns the chance that the best remaining contender wins.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Draws which place in the tournament ranking
    /// (0 being first place) is selected.
    fn winning_rank<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let number: f64 = rng.gen();
        let mut remaining = 1.0 - self.p;
        let mut rank = 0;
        while remaining > number && rank < self.tournament_size - 1 {
            rank += 1;
            remaining *= 1.0 - self.p;
        }
        rank
    }
}

impl SelectionStrategy for SelectionTournament {
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
        if self.tournament_size > population.len() {
            return Err(SelectionError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: population.len(),
            });
        }

        let mut selectees = Vec::with_capacity(members_to_select);
        for _ in 0..members_to_select {
            let mut contenders = index::sample(rng, population.len(), self.tournament_size)
                .into_vec();
            // Rank by the contenders' own fitness, independently
            // of where they sit in the population.
            contenders.sort_by(|a, b| {
                descending(population[*a].fitness(), population[*b].fitness())
            });
            let rank = self.winning_rank(rng);
            selectees.push(&population[contenders[rank]]);
        }
        Ok(selectees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::tests::evaluated;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn full_deterministic_tournament_picks_best() {
        // Deliberately unsorted, so the result can't come from position.
        let population = evaluated(&[3.0, -1.0, 9.0, 4.0, 0.5, 8.0]);
        let tournament = SelectionTournament::new(population.len(), 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let selectees = tournament.select(&population, 50, &mut rng).unwrap();
        assert_eq!(selectees.len(), 50);
        assert!(selectees.iter().all(|m| m.fitness() == 9.0));
    }

    #[test]
    fn rank_probabilities_decay() {
        let population = evaluated(&[4.0, 3.0, 2.0, 1.0]);
        let tournament = SelectionTournament::new(4, 0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let draws = 20_000;
        let selectees = tournament.select(&population, draws, &mut rng).unwrap();

        let mut counts = [0usize; 4];
        for selectee in selectees {
            counts[4 - selectee.fitness() as usize] += 1;
        }
        // Expected shares are 1/2, 1/4, 1/8 and the remaining 1/8.
        let expected = [0.5, 0.25, 0.125, 0.125];
        for (count, share) in counts.iter().zip(expected) {
            let observed = *count as f64 / draws as f64;
            assert!((observed - share).abs() < 0.02, "{:?}", counts);
        }
    }

    #[test]
    fn winning_rank_is_bounded() {
        let tournament = SelectionTournament::new(3, 0.01).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!((0..1000).all(|_| tournament.winning_rank(&mut rng) < 3));
    }

    #[test]
    fn single_contender_is_uniform() {
        let population = evaluated(&[1.0, 2.0]);
        let tournament = SelectionTournament::new(1, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let selectees = tournament.select(&population, 2000, &mut rng).unwrap();
        let best = selectees.iter().filter(|m| m.fitness() == 2.0).count();
        assert!((800..1200).contains(&best), "{}", best);
    }

    #[test]
    fn contenders_are_distinct() {
        // With two contenders out of two members and p = 1,
        // only distinct draws can always yield the best.
        let population = evaluated(&[1.0, 2.0]);
        let tournament = SelectionTournament::new(2, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let selectees = tournament.select(&population, 500, &mut rng).unwrap();
        assert!(selectees.iter().all(|m| m.fitness() == 2.0));
    }

    #[test]
    fn invalid_requests() {
        let mut rng = StdRng::seed_from_u64(0);
        let tournament = SelectionTournament::new(3, 0.5).unwrap();
        assert_eq!(
            tournament.select(&evaluated(&[]), 1, &mut rng).unwrap_err(),
            SelectionError::EmptyPopulation
        );
        assert_eq!(
            tournament
                .select(&evaluated(&[1.0, 2.0]), 1, &mut rng)
                .unwrap_err(),
            SelectionError::TournamentTooLarge {
                tournament_size: 3,
                population_size: 2
            }
        );
        assert_eq!(
            SelectionTournament::new(2, 1.5).unwrap_err(),
            SelectionError::InvalidProbability(1.5)
        );
        assert!(SelectionTournament::new(2, f64::NAN).is_err());
    }
}
