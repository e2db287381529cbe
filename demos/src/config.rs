use darwinian_nn::networks::{EpochErrors, TrainingConfig};
use darwinian_nn::neuroevolution::NeuroevolutionConfig;
use serde::{Deserialize, Serialize};

use std::error::Error;
use std::fmt;
use std::fs;

/// Settings for every demo. Any field missing
/// from a configuration file takes its default value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed of every random generator. Independent
    /// benchmark runs use consecutive seeds from it.
    pub seed: u64,
    /// Bounds of randomized network weights.
    pub weight_range: (f64, f64),
    pub nor_training: TrainingConfig,
    pub xor_training: TrainingConfig,
    pub wing_design: WingDesignConfig,
    pub neuroevolution: NeuroevolutionDemoConfig,
}

impl Default for DemoConfig {
    fn default() -> DemoConfig {
        DemoConfig {
            seed: 0,
            weight_range: (-1.0, 1.0),
            nor_training: TrainingConfig {
                learning_rate: 100.0,
                max_epochs: 1000,
                epoch_errors: EpochErrors::Truncate,
            },
            xor_training: TrainingConfig {
                learning_rate: 20.0,
                max_epochs: 2000,
                epoch_errors: EpochErrors::Truncate,
            },
            wing_design: WingDesignConfig::default(),
            neuroevolution: NeuroevolutionDemoConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Reads a configuration from a RON file.
    pub fn load(path: &str) -> Result<DemoConfig, Box<dyn Error>> {
        let contents = fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }

    /// Renders the configuration as pretty-printed RON.
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
    }
}

/// A selection strategy to benchmark.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StrategyConfig {
    Tournament { size: usize, p: f64 },
    Truncate { fraction: f64 },
    Roulette,
}

impl fmt::Display for StrategyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tournament { size, p } => write!(f, "Tournament{};{:.1}", size, p),
            Self::Truncate { fraction } => write!(f, "Truncate{}", fraction),
            Self::Roulette => write!(f, "Roulette"),
        }
    }
}

/// Settings of the wing design convergence benchmark.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingDesignConfig {
    /// Independent runs per table cell.
    pub runs: usize,
    pub population_sizes: Vec<usize>,
    pub elite_counts: Vec<usize>,
    pub strategies: Vec<StrategyConfig>,
    /// A run converges once its champion reaches this fitness.
    pub best_fitness: f64,
    /// Runs still not converged after this many generations fail.
    pub max_generations: usize,
}

impl Default for WingDesignConfig {
    fn default() -> WingDesignConfig {
        WingDesignConfig {
            runs: 20,
            population_sizes: vec![100, 150, 200],
            elite_counts: vec![1, 2, 5],
            strategies: vec![
                StrategyConfig::Truncate { fraction: 0.01 },
                StrategyConfig::Truncate { fraction: 0.02 },
                StrategyConfig::Truncate { fraction: 0.05 },
                StrategyConfig::Tournament { size: 10, p: 1.0 },
                StrategyConfig::Tournament { size: 10, p: 0.8 },
                StrategyConfig::Tournament { size: 14, p: 1.0 },
                StrategyConfig::Tournament { size: 14, p: 0.8 },
                StrategyConfig::Roulette,
            ],
            best_fitness: 98938.0,
            max_generations: 500,
        }
    }
}

/// Settings of the XOR neuro-evolution demo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeuroevolutionDemoConfig {
    pub population_size: usize,
    pub elite_count: usize,
    pub tournament_size: usize,
    pub tournament_p: f64,
    pub genetics: NeuroevolutionConfig,
    pub max_generations: usize,
    /// Print a generation summary every this many generations.
    pub report_every: usize,
}

impl Default for NeuroevolutionDemoConfig {
    fn default() -> NeuroevolutionDemoConfig {
        NeuroevolutionDemoConfig {
            population_size: 150,
            elite_count: 2,
            tournament_size: 4,
            tournament_p: 0.9,
            genetics: NeuroevolutionConfig {
                change_chance: 0.2,
                change_rate: 2.5,
                weight_bound: 10.0,
            },
            max_generations: 300,
            report_every: 25,
        }
    }
}
