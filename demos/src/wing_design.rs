use crate::config::{DemoConfig, StrategyConfig, WingDesignConfig};

use darwinian::logging::Stats;
use darwinian::{
    EvolutionConfig, EvolutionError, EvolutionaryAlgorithm, GroupedBits, PopMember,
    SelectionRoulette, SelectionStrategy, SelectionTournament, SelectionTruncate,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use std::cell::Cell;
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

const GROUPS: [usize; 4] = [6, 6, 6, 6];

/// Four 6-bit design parameters A, B, C and D.
#[derive(Clone, Debug)]
pub struct WingDesign(GroupedBits);

impl WingDesign {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> WingDesign {
        WingDesign(GroupedBits::random(&GROUPS, rng))
    }

    #[cfg(test)]
    fn from_values(values: [u64; 4]) -> WingDesign {
        WingDesign(GroupedBits::from_values(&GROUPS, &values))
    }

    fn parameters(&self) -> [i64; 4] {
        let mut parameters = [0; 4];
        for (i, p) in parameters.iter_mut().enumerate() {
            *p = self.0.group_value(i) as i64;
        }
        parameters
    }
}

impl PopMember for WingDesign {
    fn evaluate_fitness(&self) -> f64 {
        let [a, b, c, d] = self.parameters();
        ((a - b).pow(2) + (c + d).pow(2) - (a - 30).pow(3) - (c - 40).pow(3)) as f64
    }

    fn crossover<R: Rng + ?Sized>(&self, other: &Self, _: &mut R) -> Vec<Self> {
        vec![
            WingDesign(self.0.crossover(&other.0)),
            WingDesign(other.0.crossover(&self.0)),
        ]
    }

    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let flip_chance = 0.8 / self.0.len() as f64;
        self.0.mutate(flip_chance, rng);
    }
}

impl fmt::Display for WingDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.parameters();
        write!(f, "A={}; B={}; C={}; D={}\t({})", a, b, c, d, self.0)
    }
}

/// Prints, for every strategy, a table of the mean number of generations
/// needed to reach the best fitness, by population size and elite count.
///
/// Cells marked with `*` had runs that never converged; those runs
/// are left out of the mean.
pub fn benchmark(config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    let wing = &config.wing_design;
    println!(
        "mean generations to reach {} over {} runs",
        wing.best_fitness, wing.runs
    );
    for strategy in &wing.strategies {
        println!("\n{}", strategy);
        match *strategy {
            StrategyConfig::Tournament { size, p } => {
                table(&SelectionTournament::new(size, p)?, wing, config.seed)?
            }
            StrategyConfig::Truncate { fraction } => {
                table(&SelectionTruncate::new(fraction)?, wing, config.seed)?
            }
            StrategyConfig::Roulette => table(&SelectionRoulette, wing, config.seed)?,
        }
    }
    Ok(())
}

fn table<S>(selection: &S, wing: &WingDesignConfig, seed: u64) -> Result<(), Box<dyn Error>>
where
    S: SelectionStrategy + Clone + Sync,
{
    print!("{:>10}", "elites:");
    for elite_count in &wing.elite_counts {
        print!("{:>9}", elite_count);
    }
    println!();

    for &population_size in &wing.population_sizes {
        print!("{:>10}", format!("pop {}:", population_size));
        for &elite_count in &wing.elite_counts {
            let evolution = EvolutionConfig {
                population_size: NonZeroUsize::new(population_size)
                    .ok_or("population sizes must be positive")?,
                elite_count,
            };
            let generations = (0..wing.runs)
                .into_par_iter()
                .map(|run| {
                    converge(selection, &evolution, wing, seed.wrapping_add(run as u64))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let stats = Stats::from(generations.iter().flatten().map(|g| *g as f64));
            let failed = generations.iter().any(Option::is_none);
            let cell = if stats.mean.is_nan() {
                String::from("-")
            } else {
                format!("{:.1}", stats.mean)
            };
            print!("{:>8}{}", cell, if failed { '*' } else { ' ' });
        }
        println!();
    }
    Ok(())
}

/// Evolves wing designs from a seeded population, returning the
/// generation at which the best fitness was first reached, if ever.
fn converge<S>(
    selection: &S,
    evolution: &EvolutionConfig,
    wing: &WingDesignConfig,
    seed: u64,
) -> Result<Option<usize>, EvolutionError>
where
    S: SelectionStrategy + Clone,
{
    let reached = Cell::new(None);
    let mut algorithm = EvolutionaryAlgorithm::new(
        evolution.clone(),
        selection.clone(),
        |rng: &mut StdRng| WingDesign::random(rng),
    )
    .stop_when(|generation, population| {
        if population[0].fitness() == wing.best_fitness {
            reached.set(Some(generation));
            true
        } else {
            generation >= wing.max_generations
        }
    });
    algorithm.run(&mut StdRng::seed_from_u64(seed))?;
    Ok(reached.get())
}
