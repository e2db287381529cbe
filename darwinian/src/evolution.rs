mod config;
mod errors;

pub use config::EvolutionConfig;
pub use errors::EvolutionError;

use crate::member::sort_descending;
use crate::selection::SelectionStrategy;
use crate::{Member, PopMember};

use rand::Rng;

/// A population: members sorted by decreasing cached fitness.
pub type Population<M> = Vec<Member<M>>;

type StopCondition<'a, M> = Box<dyn FnMut(usize, &[Member<M>]) -> bool + 'a>;
type Callback<'a, M> = Box<dyn FnMut(usize, &[Member<M>]) + 'a>;

/// A generational evolutionary algorithm.
///
/// Each generation, parents are chosen by the selection strategy
/// from the sorted population, paired up consecutively and recombined.
/// The top `elite_count` members survive unchanged, every other slot
/// is filled with (then mutated) offspring, and the population is
/// re-evaluated and re-sorted.
///
/// Runs until the stop condition, which is checked before every
/// generation (including the very first), returns `true`.
pub struct EvolutionaryAlgorithm<'a, M, S, R: ?Sized> {
    config: EvolutionConfig,
    selection: S,
    factory: Box<dyn FnMut(&mut R) -> M + 'a>,
    stop_condition: Option<StopCondition<'a, M>>,
    callback: Option<Callback<'a, M>>,
}

impl<'a, M, S, R> EvolutionaryAlgorithm<'a, M, S, R>
where
    M: PopMember,
    S: SelectionStrategy,
    R: Rng + ?Sized,
{
    /// Creates a new algorithm. Members of the initial population
    /// are built by calling `factory` once per slot.
    ///
    /// A stop condition must be set with
    /// [`stop_when`](EvolutionaryAlgorithm::stop_when) before running.
    ///
    /// # Examples
    /// ```
    /// use darwinian::{EvolutionaryAlgorithm, EvolutionConfig, PopMember, SelectionTournament};
    /// use rand::{rngs::StdRng, Rng, SeedableRng};
    /// use std::num::NonZeroUsize;
    ///
    /// #[derive(Clone)]
    /// struct Guess(i64);
    ///
    /// impl PopMember for Guess {
    ///     fn evaluate_fitness(&self) -> f64 {
    ///         -((self.0 - 42).abs() as f64)
    ///     }
    ///     fn crossover<R: Rng + ?Sized>(&self, other: &Self, _: &mut R) -> Vec<Self> {
    ///         vec![Guess((self.0 + other.0) / 2), other.clone()]
    ///     }
    ///     fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    ///         self.0 += rng.gen_range(-2..=2);
    ///     }
    /// }
    ///
    /// let config = EvolutionConfig {
    ///     population_size: NonZeroUsize::new(20).unwrap(),
    ///     elite_count: 2,
    /// };
    /// let selection = SelectionTournament::new(3, 0.9).unwrap();
    /// let mut algorithm = EvolutionaryAlgorithm::new(config, selection, |rng: &mut StdRng| {
    ///     Guess(rng.gen_range(-100..100))
    /// })
    /// .stop_when(|generation, _| generation == 10);
    ///
    /// let population = algorithm.run(&mut StdRng::seed_from_u64(0)).unwrap();
    /// assert_eq!(population.len(), 20);
    /// ```
    pub fn new<F>(config: EvolutionConfig, selection: S, factory: F) -> Self
    where
        F: FnMut(&mut R) -> M + 'a,
    {
        EvolutionaryAlgorithm {
            config,
            selection,
            factory: Box::new(factory),
            stop_condition: None,
            callback: None,
        }
    }

    /// Sets the stop condition, called with the generation
    /// number and the current population.
    pub fn stop_when<F>(mut self, stop_condition: F) -> Self
    where
        F: FnMut(usize, &[Member<M>]) -> bool + 'a,
    {
        self.stop_condition = Some(Box::new(stop_condition));
        self
    }

    /// Sets a callback invoked at the end of every generation
    /// with the generation number and the new population.
    pub fn on_generation<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize, &[Member<M>]) + 'a,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Returns the algorithm's configuration.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Returns the selection strategy in use.
    pub fn selection(&self) -> &S {
        &self.selection
    }

    /// Evolves a fresh population until the stop condition holds,
    /// and returns it sorted by decreasing fitness.
    ///
    /// # Errors
    /// Returns an error if no stop condition was set, the configuration
    /// is invalid, the selection strategy cannot handle the population,
    /// or crossover yields too few children to refill it.
    pub fn run(&mut self, rng: &mut R) -> Result<Population<M>, EvolutionError> {
        self.config.validate()?;
        let EvolutionaryAlgorithm {
            config,
            selection,
            factory,
            stop_condition,
            callback,
        } = self;
        let stop_condition = stop_condition
            .as_mut()
            .ok_or(EvolutionError::MissingStopCondition)?;

        let population_size = config.population_size.get();
        let elite_count = config.elite_count;
        let selectees_count = config.selectees_count();

        let mut population: Population<M> = Vec::with_capacity(population_size + selectees_count);
        for _ in 0..population_size {
            population.push(Member::new(factory(rng)));
        }
        evaluate_and_sort(&mut population);

        let mut generation = 0;
        while !stop_condition(generation, population.as_slice()) {
            let mut offspring = Vec::with_capacity(selectees_count);
            {
                let parents = selection.select(&population, selectees_count, rng)?;
                for pair in parents.chunks_exact(2) {
                    let children = pair[0].inner().crossover(pair[1].inner(), rng);
                    offspring.extend(children.into_iter().map(Member::new));
                }
            }

            population.truncate(elite_count);
            population.extend(offspring);
            if population.len() < population_size {
                return Err(EvolutionError::InsufficientOffspring {
                    expected: population_size - elite_count,
                    produced: population.len() - elite_count,
                });
            }
            population.truncate(population_size);

            for member in &mut population[elite_count..] {
                member.mutate(rng);
            }
            evaluate_and_sort(&mut population);

            if let Some(callback) = callback {
                callback(generation, population.as_slice());
            }
            generation += 1;
        }
        Ok(population)
    }
}

fn evaluate_and_sort<M: PopMember>(population: &mut [Member<M>]) {
    for member in population.iter_mut() {
        member.evaluate();
    }
    sort_descending(population);
}
