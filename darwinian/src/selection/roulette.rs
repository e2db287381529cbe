use super::{SelectionError, SelectionStrategy};
use crate::Member;

use rand::Rng;

/// Fitness-proportional (roulette wheel) selection.
///
/// Each member gets a slice of the wheel proportional to its fitness.
/// If any fitness is negative, all fitnesses are shifted up by twice the
/// lowest one, so the worst member still keeps a non-zero chance.
/// NaN fitnesses get no slice. If the wheel ends up empty (or infinite),
/// members are chosen uniformly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionRoulette;

impl SelectionStrategy for SelectionRoulette {
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

        let lowest = population
            .iter()
            .map(Member::fitness)
            .filter(|f| !f.is_nan())
            .fold(f64::INFINITY, f64::min);
        let offset = (lowest * 2.0).min(0.0);

        let mut total = 0.0;
        let cumulative: Vec<f64> = population
            .iter()
            .map(|m| {
                let slice = m.fitness() - offset;
                if !slice.is_nan() {
                    total += slice;
                }
                total
            })
            .collect();

        let wheel_size = total;
        let uniform = !(wheel_size > 0.0 && wheel_size.is_finite());
        let selectees = (0..members_to_select)
            .map(|_| {
                let index = if uniform {
                    rng.gen_range(0..population.len())
                } else {
                    let picked = rng.gen::<f64>() * wheel_size;
                    cumulative
                        .partition_point(|c| *c <= picked)
                        .min(population.len() - 1)
                };
                &population[index]
            })
            .collect();
        Ok(selectees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::tests::evaluated;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn share_of(selectees: &[&Member<crate::member::tests::Fixed>], fitness: f64) -> f64 {
        selectees.iter().filter(|m| m.fitness() == fitness).count() as f64 / selectees.len() as f64
    }

    #[test]
    fn proportional_to_fitness() {
        let population = evaluated(&[3.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(4);
        let selectees = SelectionRoulette
            .select(&population, 20_000, &mut rng)
            .unwrap();
        assert!((share_of(&selectees, 3.0) - 0.75).abs() < 0.02);
    }

    #[test]
    fn negative_fitnesses_are_shifted() {
        // The lowest is -2, so slices become 3 and 2.
        let population = evaluated(&[-1.0, -2.0]);
        let mut rng = StdRng::seed_from_u64(6);
        let selectees = SelectionRoulette
            .select(&population, 20_000, &mut rng)
            .unwrap();
        assert!((share_of(&selectees, -1.0) - 0.6).abs() < 0.02);
        assert!(share_of(&selectees, -2.0) > 0.0);
    }

    #[test]
    fn zero_slices_are_never_picked() {
        let population = evaluated(&[0.0, 5.0, 0.0, f64::NAN]);
        let mut rng = StdRng::seed_from_u64(9);
        let selectees = SelectionRoulette
            .select(&population, 1000, &mut rng)
            .unwrap();
        assert!(selectees.iter().all(|m| m.fitness() == 5.0));
    }

    #[test]
    fn empty_wheel_is_uniform() {
        let population = evaluated(&[0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(10);
        let selectees = SelectionRoulette
            .select(&population, 30, &mut rng)
            .unwrap();
        assert_eq!(selectees.len(), 30);
        assert_eq!(
            SelectionRoulette
                .select(&evaluated(&[]), 1, &mut rng)
                .unwrap_err(),
            SelectionError::EmptyPopulation
        );
    }
}
