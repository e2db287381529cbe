use crate::config::DemoConfig;

use darwinian::logging::{EvolutionLogger, ReportingLevel};
use darwinian::{EvolutionConfig, EvolutionaryAlgorithm, Member, SelectionTournament};
use darwinian_nn::networks::{ActivationType, NeuralNetwork, NeuronInfo};
use darwinian_nn::neuroevolution::{NetworkMember, NetworkTask};
use rand::rngs::StdRng;
use rand::SeedableRng;

use std::cell::RefCell;
use std::error::Error;
use std::num::NonZeroUsize;
use std::rc::Rc;

const XOR: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], 0.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 0.0], 1.0),
    ([1.0, 1.0], 0.0),
];

/// Errors within this margin count as no error at all.
const ERROR_MARGIN: f64 = 0.3;

/// Fitness of a network that solves XOR within the margin.
pub const SOLVED: f64 = 16.0;

/// Scores a network on the XOR truth table,
/// from 0 up to [`SOLVED`].
pub struct XorTask;

impl NetworkTask for XorTask {
    fn score(&self, network: &mut NeuralNetwork) -> f64 {
        let error: f64 = XOR
            .iter()
            .map(|(input, desired)| {
                let output = network.activate(input).map_or(f64::NAN, |o| o[0]);
                let error = (output - desired).abs();
                if error < ERROR_MARGIN {
                    0.0
                } else {
                    error
                }
            })
            .sum();
        (4.0 - error).powi(2)
    }
}

/// Evolves the weights of 2-2-1 sigmoid networks until one solves XOR.
pub fn xor(config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    let settings = &config.neuroevolution;
    let evolution = EvolutionConfig {
        population_size: NonZeroUsize::new(settings.population_size)
            .ok_or("population size must be positive")?,
        elite_count: settings.elite_count,
    };
    let selection = SelectionTournament::new(settings.tournament_size, settings.tournament_p)?;
    let template = NeuralNetwork::new(
        2,
        &[vec![NeuronInfo::new(ActivationType::Sigmoid); 2]],
        &[NeuronInfo::new(ActivationType::Sigmoid)],
    )?;
    settings.genetics.validate()?;
    let task = Rc::new(XorTask);
    let genetics = Rc::new(settings.genetics.clone());

    let logger = RefCell::new(EvolutionLogger::new(ReportingLevel::Champion));
    let mut algorithm = EvolutionaryAlgorithm::new(evolution, selection, |rng: &mut StdRng| {
        NetworkMember::random(&template, Rc::clone(&task), Rc::clone(&genetics), rng)
            .expect("weight bound already validated")
    })
    .stop_when(|generation, population| {
        population[0].fitness() >= SOLVED || generation >= settings.max_generations
    })
    .on_generation(|generation, population| {
        let mut logger = logger.borrow_mut();
        let fitness = |m: &Member<NetworkMember<XorTask>>| [m.fitness()];
        logger.log(generation, population, &fitness, ["fitness"]);
        if settings.report_every > 0 && generation % settings.report_every == 0 {
            if let Some(log) = logger.last() {
                println!("{}", log);
            }
        }
    });

    let population = algorithm.run(&mut StdRng::seed_from_u64(config.seed))?;
    drop(algorithm);

    let logger = logger.into_inner();
    let generations = logger.iter().count();
    let champion = &population[0];
    if champion.fitness() >= SOLVED {
        println!("\nsolved after {} generations", generations);
    } else {
        println!("\nnot solved after {} generations", generations);
    }
    println!("champion fitness: {:.4}", champion.fitness());

    let mut network = champion.inner().network().clone();
    println!("{}\n", network);
    for (input, desired) in &XOR {
        let output = network.activate(input)?;
        println!("{:?} -> {:.4} (desired {})", input, output[0], desired);
    }
    println!("weights: {:?}", network.weights());
    Ok(())
}
