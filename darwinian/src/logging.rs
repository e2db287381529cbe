//! Per-generation snapshots of an evolving population.
//!
//! An [`EvolutionLogger`] is meant to be driven from an
//! [`EvolutionaryAlgorithm`]'s generation callback:
//!
//! ```
//! use darwinian::logging::{EvolutionLogger, ReportingLevel};
//! use darwinian::{EvolutionaryAlgorithm, EvolutionConfig, Member, PopMember, SelectionTruncate};
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//! use std::cell::RefCell;
//! use std::num::NonZeroUsize;
//!
//! #[derive(Clone)]
//! struct Guess(i64);
//!
//! impl PopMember for Guess {
//!     fn evaluate_fitness(&self) -> f64 {
//!         -((self.0 - 42).abs() as f64)
//!     }
//!     fn crossover<R: Rng + ?Sized>(&self, other: &Self, _: &mut R) -> Vec<Self> {
//!         vec![self.clone(), other.clone()]
//!     }
//!     fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
//!         self.0 += rng.gen_range(-1..=1);
//!     }
//! }
//!
//! let logger = RefCell::new(EvolutionLogger::new(ReportingLevel::Champion));
//! let config = EvolutionConfig {
//!     population_size: NonZeroUsize::new(10).unwrap(),
//!     elite_count: 1,
//! };
//! let mut algorithm = EvolutionaryAlgorithm::new(
//!     config,
//!     SelectionTruncate::new(0.5).unwrap(),
//!     |rng: &mut StdRng| Guess(rng.gen_range(0..100)),
//! )
//! .stop_when(|generation, _| generation == 5)
//! .on_generation(|generation, population| {
//!     logger
//!         .borrow_mut()
//!         .log(generation, population, &|m: &Member<Guess>| [m.fitness()], ["fitness"])
//! });
//! algorithm.run(&mut StdRng::seed_from_u64(0)).unwrap();
//! drop(algorithm);
//!
//! let logger = logger.into_inner();
//! assert_eq!(logger.iter().count(), 5);
//! assert_eq!(logger.last().unwrap().generation, 4);
//! ```
//!
//! [`EvolutionaryAlgorithm`]: crate::EvolutionaryAlgorithm
use crate::Member;

use std::fmt;

/// Defines different possible reporting levels for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportingLevel {
    /// Clones the entire population.
    AllMembers,
    /// Clones only the population champion.
    Champion,
    /// Clones no members.
    NoMembers,
}

/// A reporting-level dependant store
/// of members from a population.
#[derive(Clone, Debug)]
pub enum GenerationSample<M> {
    /// Every member, best first.
    Population(Vec<Member<M>>),
    /// Only the population champion.
    Champion(Member<M>),
    /// Empty.
    None,
}

/// A snapshot of a population.
#[derive(Clone, Debug)]
pub struct Log<M> {
    pub generation: usize,
    pub sample: GenerationSample<M>,
    pub member_stats: Vec<(String, Stats)>,
}

impl<M> fmt::Display for Log<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Log {{")?;
        writeln!(f, "\tgeneration: {}", self.generation)?;
        for (name, stats) in &self.member_stats {
            writeln!(f, "\t{}: {}", name, stats)?;
        }
        write!(f, "}}")
    }
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub maximum: f64,
    pub minimum: f64,
    pub mean: f64,
    pub median: f64,
}

impl Stats {
    /// Returns statistics about numbers in a sequence.
    /// An empty sequence yields NaN for every statistic.
    ///
    /// # Examples
    /// ```
    /// use darwinian::logging::Stats;
    ///
    /// let stats = Stats::from([-2.0, -1.0, 0.5, 1.0, 1.5].iter().copied());
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    /// ```
    pub fn from(data: impl Iterator<Item = f64>) -> Stats {
        let mut data: Vec<f64> = data.collect();
        if data.is_empty() {
            return Stats {
                maximum: f64::NAN,
                minimum: f64::NAN,
                mean: f64::NAN,
                median: f64::NAN,
            };
        }
        let (mut max, mut min, mut sum) = (f64::MIN, f64::MAX, 0.0);
        for d in &data {
            max = d.max(max);
            min = d.min(min);
            sum += d;
        }
        let mean = sum / data.len() as f64;

        data.sort_by(|a, b| a.total_cmp(b));
        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Stats {
            maximum: max,
            minimum: min,
            mean,
            median,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max {:.4}, min {:.4}, mean {:.4}, median {:.4}",
            self.maximum, self.minimum, self.mean, self.median
        )
    }
}

/// A log of the evolution of a population over time.
#[derive(Clone, Debug)]
pub struct EvolutionLogger<M> {
    reporting_level: ReportingLevel,
    logs: Vec<Log<M>>,
}

impl<M: Clone> EvolutionLogger<M> {
    /// Returns a logger with the appropiate reporting level.
    pub fn new(reporting_level: ReportingLevel) -> EvolutionLogger<M> {
        EvolutionLogger {
            reporting_level,
            logs: vec![],
        }
    }

    /// Store a snapshot of a (sorted) population.
    ///
    /// The `stat_extractor` provides a way of
    /// obtaining arbitrary statistics on the population,
    /// where each statistic is named by `stat_names`.
    pub fn log<E, const N: usize>(
        &mut self,
        generation: usize,
        population: &[Member<M>],
        stat_extractor: &E,
        stat_names: [&str; N],
    ) where
        E: Fn(&Member<M>) -> [f64; N],
    {
        let stats = unzip_n_vecs(population.iter().map(stat_extractor));
        let member_stats = stat_names
            .iter()
            .map(|name| String::from(*name))
            .zip(stats)
            .map(|(name, data)| (name, Stats::from(data.into_iter())))
            .collect();
        let sample = match (self.reporting_level, population.first()) {
            (ReportingLevel::AllMembers, _) => GenerationSample::Population(population.to_vec()),
            (ReportingLevel::Champion, Some(champion)) => {
                GenerationSample::Champion(champion.clone())
            }
            _ => GenerationSample::None,
        };
        self.logs.push(Log {
            generation,
            sample,
            member_stats,
        });
    }

    /// Iterate over all logged snapshots.
    pub fn iter(&self) -> impl Iterator<Item = &Log<M>> {
        self.logs.iter()
    }

    /// Returns the most recent snapshot.
    pub fn last(&self) -> Option<&Log<M>> {
        self.logs.last()
    }

    /// Iterate over a named statistic across all snapshots.
    /// Yields nothing if no statistic was logged by that name.
    pub fn stat<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s Stats> + 's {
        self.logs.iter().filter_map(move |log| {
            log.member_stats
                .iter()
                .find(|(stat_name, _)| stat_name == name)
                .map(|(_, stats)| stats)
        })
    }
}

fn unzip_n_vecs<T: Clone, const N: usize>(iter: impl Iterator<Item = [T; N]>) -> Vec<Vec<T>> {
    let mut vecs = vec![Vec::default(); N];
    for items in iter {
        for (vec, item) in vecs.iter_mut().zip(items) {
            vec.push(item);
        }
    }
    vecs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::tests::{evaluated, Fixed};

    #[test]
    fn stats_of_even_length() {
        let stats = Stats::from([4.0, 1.0, 3.0, 2.0].iter().copied());
        assert_eq!(stats.maximum, 4.0);
        assert_eq!(stats.minimum, 1.0);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn stats_of_nothing() {
        let stats = Stats::from(std::iter::empty());
        assert!(stats.maximum.is_nan());
        assert!(stats.median.is_nan());
    }

    #[test]
    fn logs_named_stats() {
        let mut logger = EvolutionLogger::<Fixed>::new(ReportingLevel::Champion);
        let population = evaluated(&[3.0, 2.0, 1.0]);
        logger.log(
            7,
            &population,
            &|m| [m.fitness(), m.fitness() * 2.0],
            ["fitness", "double"],
        );

        let log = logger.last().unwrap();
        assert_eq!(log.generation, 7);
        assert_eq!(log.member_stats[0].0, "fitness");
        assert_eq!(log.member_stats[1].1.maximum, 6.0);
        match &log.sample {
            GenerationSample::Champion(champion) => assert_eq!(champion.fitness(), 3.0),
            other => panic!("unexpected sample {:?}", other),
        }

        let means: Vec<f64> = logger.stat("fitness").map(|s| s.mean).collect();
        assert_eq!(means, [2.0]);
        assert_eq!(logger.stat("missing").count(), 0);
        assert!(log.to_string().contains("generation: 7"));
    }

    #[test]
    fn reporting_levels() {
        let population = evaluated(&[1.0, 0.5]);

        let mut all = EvolutionLogger::new(ReportingLevel::AllMembers);
        all.log(0, &population, &|m| [m.fitness()], ["fitness"]);
        assert!(matches!(
            &all.last().unwrap().sample,
            GenerationSample::Population(members) if members.len() == 2
        ));

        let mut none = EvolutionLogger::new(ReportingLevel::NoMembers);
        none.log(0, &population, &|m| [m.fitness()], ["fitness"]);
        let last = none.last().unwrap();
        assert!(matches!(last.sample, GenerationSample::None));

        let mut empty = EvolutionLogger::<Fixed>::new(ReportingLevel::Champion);
        empty.log(0, &[], &|m| [m.fitness()], ["fitness"]);
        let last = empty.last().unwrap();
        assert!(matches!(last.sample, GenerationSample::None));
    }
}
