use crate::config::DemoConfig;

use darwinian::logging::Stats;
use darwinian_nn::networks::{
    ActivationType, NetworkError, NeuralNetwork, NeuronInfo, TrainingConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use std::error::Error;

const NOR: [([f64; 3], [f64; 1]); 8] = [
    ([0.0, 0.0, 0.0], [1.0]),
    ([0.0, 0.0, 1.0], [0.0]),
    ([0.0, 1.0, 0.0], [0.0]),
    ([0.0, 1.0, 1.0], [0.0]),
    ([1.0, 0.0, 0.0], [0.0]),
    ([1.0, 0.0, 1.0], [0.0]),
    ([1.0, 1.0, 0.0], [0.0]),
    ([1.0, 1.0, 1.0], [0.0]),
];

const XOR: [([f64; 2], [f64; 1]); 4] = [
    ([0.0, 0.0], [0.0]),
    ([0.0, 1.0], [1.0]),
    ([1.0, 0.0], [1.0]),
    ([1.0, 1.0], [0.0]),
];

/// Outputs are (sum, carry).
const ADDER: [([f64; 2], [f64; 2]); 4] = [
    ([0.0, 0.0], [0.0, 0.0]),
    ([0.0, 1.0], [1.0, 0.0]),
    ([1.0, 0.0], [1.0, 0.0]),
    ([1.0, 1.0], [0.0, 1.0]),
];

/// A three-input NOR gate made of a single threshold neuron.
pub fn nor_gate() -> Result<NeuralNetwork, NetworkError> {
    NeuralNetwork::new(
        3,
        &[],
        &[NeuronInfo::with_weights(
            ActivationType::Threshold(0.0),
            vec![-1.0, -1.0, -1.0, 0.0],
        )],
    )
}

/// A half adder built from threshold neurons. The hidden layer
/// computes OR and AND, and the outputs derive sum and carry from them.
pub fn half_adder() -> Result<NeuralNetwork, NetworkError> {
    let threshold = ActivationType::Threshold(0.5);
    NeuralNetwork::new(
        2,
        &[vec![
            NeuronInfo::with_weights(threshold, vec![1.0, 1.0, 0.0]),
            NeuronInfo::with_weights(threshold, vec![1.0, 1.0, -1.0]),
        ]],
        &[
            NeuronInfo::with_weights(threshold, vec![1.0, -1.0, 0.0]),
            NeuronInfo::with_weights(threshold, vec![0.0, 1.0, 0.0]),
        ],
    )
}

pub fn nor() -> Result<(), Box<dyn Error>> {
    let mut network = nor_gate()?;
    println!("{}\n", network);
    report(&mut network, &NOR)?;
    Ok(())
}

pub fn adder() -> Result<(), Box<dyn Error>> {
    let mut network = half_adder()?;
    println!("{}\n", network);
    report(&mut network, &ADDER)?;
    Ok(())
}

/// Trains a single sigmoid neuron on the NOR truth table.
pub fn nor_training(config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    let mut network = NeuralNetwork::new(3, &[], &[NeuronInfo::new(ActivationType::Sigmoid)])?;
    train(&mut network, &NOR, config, &config.nor_training)
}

/// Trains a 2-2-1 sigmoid network on the XOR truth table.
pub fn xor_training(config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    let mut network = NeuralNetwork::new(
        2,
        &[vec![NeuronInfo::new(ActivationType::Sigmoid); 2]],
        &[NeuronInfo::new(ActivationType::Sigmoid)],
    )?;
    train(&mut network, &XOR, config, &config.xor_training)
}

fn train<const I: usize, const O: usize>(
    network: &mut NeuralNetwork,
    table: &[([f64; I], [f64; O])],
    config: &DemoConfig,
    training: &TrainingConfig,
) -> Result<(), Box<dyn Error>> {
    let (min, max) = config.weight_range;
    let mut rng = StdRng::seed_from_u64(config.seed);
    network.randomize(&mut rng, min, max)?;
    println!("before training:");
    report(network, table)?;

    let (inputs, desired): (Vec<_>, Vec<_>) = table.iter().copied().unzip();
    let errors = network.train_with(&inputs, &desired, training)?;
    println!(
        "\ntrained for {} epochs (learning rate {})",
        errors.len(),
        training.learning_rate
    );
    println!("epoch errors: {}", Stats::from(errors.iter().copied()));
    if let Some(last) = errors.last() {
        println!("final error: {:.6}", last);
    }

    println!("\nafter training:");
    report(network, table)?;
    println!("\nweights: {:?}", network.weights());
    Ok(())
}

/// Prints the network's output for every row of a truth table,
/// followed by the mean squared error over the table.
fn report<const I: usize, const O: usize>(
    network: &mut NeuralNetwork,
    table: &[([f64; I], [f64; O])],
) -> Result<f64, NetworkError> {
    let mut squared_error = 0.0;
    for (input, desired) in table {
        let output = network.activate(input)?;
        squared_error += output
            .iter()
            .zip(desired)
            .map(|(o, d)| (o - d).powi(2))
            .sum::<f64>();
        println!("{:?} -> {:.4?} (desired {:?})", input, output, desired);
    }
    let mse = squared_error / (table.len() * O) as f64;
    println!("mean squared error: {:.6}", mse);
    Ok(mse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_weighted_gates() {
        let mut nor = nor_gate().unwrap();
        for (input, desired) in &NOR {
            assert_eq!(nor.activate(input).unwrap(), desired);
        }
        let mut adder = half_adder().unwrap();
        for (input, desired) in &ADDER {
            assert_eq!(adder.activate(input).unwrap(), desired);
        }
        assert_eq!(report(&mut adder, &ADDER).unwrap(), 0.0);
    }

    #[test]
    fn training_runs_with_defaults() {
        let config = DemoConfig::default();
        nor_training(&config).unwrap();
        xor_training(&config).unwrap();
    }

    #[test]
    fn bad_weight_range_is_reported() {
        let config = DemoConfig {
            weight_range: (1.0, -1.0),
            ..DemoConfig::default()
        };
        assert!(nor_training(&config).is_err());
    }
}
