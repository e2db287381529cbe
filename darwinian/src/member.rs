use rand::Rng;

use std::cmp::Ordering;
use std::fmt;

/// An interface for types that can be evolved
/// by an [`EvolutionaryAlgorithm`].
///
/// Implementors only describe the genetic operators;
/// fitness caching is handled by the [`Member`] wrapper.
///
/// [`EvolutionaryAlgorithm`]: crate::EvolutionaryAlgorithm
pub trait PopMember: Sized {
    /// Computes the member's fitness. Higher is better.
    ///
    /// Should be deterministic given the member's state.
    fn evaluate_fitness(&self) -> f64;

    /// Combines two members and returns one or more children.
    /// Neither parent is modified.
    fn crossover<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> Vec<Self>;

    /// Randomly perturbs the member in place.
    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

/// A population member together with its cached fitness.
///
/// The fitness is only recomputed on an explicit call to
/// [`evaluate`](Member::evaluate), and is 0 until then.
#[derive(Clone, Debug, PartialEq)]
pub struct Member<M> {
    inner: M,
    fitness: f64,
}

impl<M> Member<M> {
    /// Wraps a member, with a fitness of 0.
    ///
    /// # Examples
    /// ```
    /// use darwinian::{Member, PopMember};
    /// # use rand::Rng;
    ///
    /// struct Constant(f64);
    ///
    /// impl PopMember for Constant {
    ///     fn evaluate_fitness(&self) -> f64 { self.0 }
    ///     fn crossover<R: Rng + ?Sized>(&self, _: &Self, _: &mut R) -> Vec<Self> { vec![] }
    ///     fn mutate<R: Rng + ?Sized>(&mut self, _: &mut R) {}
    /// }
    ///
    /// let mut member = Member::new(Constant(3.5));
    /// assert_eq!(member.fitness(), 0.0);
    ///
    /// member.evaluate();
    /// assert_eq!(member.fitness(), 3.5);
    /// ```
    pub fn new(inner: M) -> Member<M> {
        Member {
            inner,
            fitness: 0.0,
        }
    }

    /// Returns the cached fitness, without recomputing it.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Returns the wrapped member.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwraps the member, discarding its fitness.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: PopMember> Member<M> {
    /// Recomputes and caches the member's fitness.
    pub fn evaluate(&mut self) {
        self.fitness = self.inner.evaluate_fitness();
    }

    /// Mutates the wrapped member. The cached fitness is left
    /// stale until the next evaluation.
    pub(crate) fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.inner.mutate(rng);
    }
}

impl<M: fmt::Display> fmt::Display for Member<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.inner, self.fitness)
    }
}

/// Orders fitness values from best to worst. NaN sorts last.
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Stable sort of a population by decreasing fitness.
pub(crate) fn sort_descending<M>(population: &mut [Member<M>]) {
    population.sort_by(|m1, m2| descending(m1.fitness, m2.fitness));
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal member with a fixed fitness, used by
    /// the selection strategy tests.
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct Fixed(pub f64);

    impl PopMember for Fixed {
        fn evaluate_fitness(&self) -> f64 {
            self.0
        }

        fn crossover<R: Rng + ?Sized>(&self, other: &Fixed, _rng: &mut R) -> Vec<Fixed> {
            vec![self.clone(), other.clone()]
        }

        fn mutate<R: Rng + ?Sized>(&mut self, _rng: &mut R) {}
    }

    pub(crate) fn evaluated(fitnesses: &[f64]) -> Vec<Member<Fixed>> {
        fitnesses
            .iter()
            .map(|f| {
                let mut member = Member::new(Fixed(*f));
                member.evaluate();
                member
            })
            .collect()
    }

    #[test]
    fn fitness_is_cached() {
        let mut member = Member::new(Fixed(2.0));
        assert_eq!(member.fitness(), 0.0);
        member.evaluate();
        assert_eq!(member.fitness(), 2.0);
        member.inner.0 = 5.0;
        assert_eq!(member.fitness(), 2.0);
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let mut population = evaluated(&[1.0, 3.0, 2.0, 3.0]);
        population[3].inner = Fixed(-3.0);
        sort_descending(&mut population);
        let order: Vec<f64> = population.iter().map(|m| m.inner().0).collect();
        // The second 3.0 had its inner value changed after evaluation,
        // but still sorts by its cached fitness, after the first 3.0.
        assert_eq!(order, [3.0, -3.0, 2.0, 1.0]);
    }

    #[test]
    fn nan_sorts_last() {
        let mut population = evaluated(&[f64::NAN, 1.0, f64::NEG_INFINITY, 4.0]);
        sort_descending(&mut population);
        assert_eq!(population[0].fitness(), 4.0);
        assert_eq!(population[1].fitness(), 1.0);
        assert_eq!(population[2].fitness(), f64::NEG_INFINITY);
        assert!(population[3].fitness().is_nan());
    }
}
