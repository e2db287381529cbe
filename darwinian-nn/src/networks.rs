//! Layered feed-forward networks trained by back-propagation.
//!
//! A network has an input layer, any number of hidden layers and an
//! output layer. Every neuron of a layer is wired to every neuron of
//! the previous one. The input layer and each hidden layer end with a
//! bias neuron, which always outputs 1.
mod activation;
mod config;
mod errors;
mod neurons;

pub use activation::ActivationType;
pub use config::{EpochErrors, TrainingConfig};
pub use errors::NetworkError;
pub use neurons::{InputNeuron, LayerId, Neuron, StandardNeuron};

use rand::distributions::Uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::iter;

/// Construction-time description of a single neuron.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NeuronInfo {
    pub activation: ActivationType,
    /// Initial weights, one per neuron of the previous layer
    /// (its bias included). If `None`, the network must be
    /// randomized before use.
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
}

impl NeuronInfo {
    /// Describes a neuron with weights left to randomization.
    pub fn new(activation: ActivationType) -> NeuronInfo {
        NeuronInfo {
            activation,
            weights: None,
        }
    }

    /// Describes a neuron with the given initial weights.
    pub fn with_weights(activation: ActivationType, weights: Vec<f64>) -> NeuronInfo {
        NeuronInfo {
            activation,
            weights: Some(weights),
        }
    }
}

/// A fully-connected feed-forward neural network.
///
/// The topology is fixed at construction; only neuron
/// weights and activation state change afterwards.
#[derive(Clone, Debug)]
pub struct NeuralNetwork {
    layers: Box<[Box<[Neuron]>]>,
    input_count: usize,
    initialized: bool,
}

impl NeuralNetwork {
    /// Builds a network with `input_count` inputs, one hidden layer per
    /// element of `hidden_layers`, and the specified output layer.
    ///
    /// # Errors
    /// Returns an error if the output layer or any hidden layer is
    /// empty, or a neuron is given a number of weights different from
    /// the size of its predecessor layer (bias included).
    ///
    /// # Examples
    /// ```
    /// use darwinian_nn::networks::{ActivationType, NeuralNetwork, NeuronInfo};
    ///
    /// // A NOR gate: fires only if every input is 0.
    /// let mut nor = NeuralNetwork::new(
    ///     3,
    ///     &[],
    ///     &[NeuronInfo::with_weights(ActivationType::Threshold(0.0), vec![-1.0, -1.0, -1.0, 0.0])],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(nor.activate(&[0.0, 0.0, 0.0]).unwrap(), [1.0]);
    /// assert_eq!(nor.activate(&[0.0, 1.0, 0.0]).unwrap(), [0.0]);
    /// ```
    pub fn new(
        input_count: usize,
        hidden_layers: &[Vec<NeuronInfo>],
        output_layer: &[NeuronInfo],
    ) -> Result<NeuralNetwork, NetworkError> {
        if output_layer.is_empty() {
            return Err(NetworkError::EmptyOutputLayer);
        }
        let mut layers: Vec<Box<[Neuron]>> = Vec::with_capacity(hidden_layers.len() + 2);
        layers.push(
            iter::repeat_with(Neuron::input)
                .take(input_count)
                .chain(iter::once(Neuron::Bias))
                .collect(),
        );
        for (i, spec) in hidden_layers.iter().enumerate() {
            if spec.is_empty() {
                return Err(NetworkError::EmptyHiddenLayer(i));
            }
            let mut layer = wired_layer(&layers, spec)?;
            layer.push(Neuron::Bias);
            layers.push(layer.into_boxed_slice());
        }
        let output = wired_layer(&layers, output_layer)?;
        layers.push(output.into_boxed_slice());

        let initialized = hidden_layers
            .iter()
            .flatten()
            .chain(output_layer)
            .all(|info| info.weights.is_some());
        Ok(NeuralNetwork {
            layers: layers.into_boxed_slice(),
            input_count,
            initialized,
        })
    }

    /// Replaces every trainable weight with a uniform value in
    /// `[min, max)`, hidden layers first, then the output layer.
    ///
    /// # Errors
    /// Returns an error unless both bounds are finite and `min < max`.
    ///
    /// # Examples
    /// ```
    /// use darwinian_nn::networks::{ActivationType, NeuralNetwork, NeuronInfo};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut network = NeuralNetwork::new(2, &[], &[NeuronInfo::new(ActivationType::Sigmoid)]).unwrap();
    /// assert!(network.activate(&[0.0, 1.0]).is_err());
    ///
    /// network.randomize(&mut StdRng::seed_from_u64(0), -1.0, 1.0).unwrap();
    /// assert!(network.activate(&[0.0, 1.0]).is_ok());
    /// ```
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: f64,
        max: f64,
    ) -> Result<(), NetworkError> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(NetworkError::InvalidWeightRange { min, max });
        }
        let distribution = Uniform::new(min, max);
        for l in 1..self.layers.len() {
            let (before, after) = self.layers.split_at_mut(l);
            for neuron in after[0].iter_mut() {
                if let Some(LayerId(p)) = neuron.predecessor() {
                    neuron.randomize_weights(before[p].len(), &distribution, rng);
                }
            }
        }
        self.initialized = true;
        Ok(())
    }

    /// Feeds `inputs` forward through the network and
    /// returns the outputs of the output layer.
    ///
    /// # Errors
    /// Returns an error if the number of inputs differs from the
    /// network's input count, or its weights were never set.
    pub fn activate(&mut self, inputs: &[f64]) -> Result<Vec<f64>, NetworkError> {
        self.check_inputs(inputs)?;
        if !self.initialized {
            return Err(NetworkError::UninitializedWeights);
        }
        Ok(self.forward(inputs))
    }

    /// Trains the network by back-propagation for at most `max_epochs`
    /// passes over the training set.
    ///
    /// Returns the summed squared error of each epoch run, as measured
    /// during the epoch. Training stops early once an epoch's error is
    /// exactly 0.
    ///
    /// # Errors
    /// Returns an error if the inputs and desired outputs differ in
    /// number or shape from each other or from the network, or the
    /// network's weights were never set. No training happens then.
    ///
    /// # Examples
    /// ```
    /// use darwinian_nn::networks::{ActivationType, NeuralNetwork, NeuronInfo};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut identity = NeuralNetwork::new(1, &[], &[NeuronInfo::new(ActivationType::Identity)]).unwrap();
    /// identity.randomize(&mut StdRng::seed_from_u64(0), -1.0, 1.0).unwrap();
    ///
    /// let errors = identity
    ///     .train(&[[0.0], [1.0], [2.0]], &[[0.0], [1.0], [2.0]], 0.1, 500)
    ///     .unwrap();
    /// assert!(errors.last().unwrap() < &errors[0]);
    /// ```
    pub fn train<I, D>(
        &mut self,
        inputs: &[I],
        desired_outputs: &[D],
        learning_rate: f64,
        max_epochs: usize,
    ) -> Result<Vec<f64>, NetworkError>
    where
        I: AsRef<[f64]>,
        D: AsRef<[f64]>,
    {
        self.train_with(
            inputs,
            desired_outputs,
            &TrainingConfig {
                learning_rate,
                max_epochs,
                ..TrainingConfig::zero()
            },
        )
    }

    /// Same as [`train`](NeuralNetwork::train), with the training
    /// parameters taken from `config`. The returned error sequence is
    /// zero-padded to `max_epochs` if so configured.
    ///
    /// # Errors
    /// See [`train`](NeuralNetwork::train).
    pub fn train_with<I, D>(
        &mut self,
        inputs: &[I],
        desired_outputs: &[D],
        config: &TrainingConfig,
    ) -> Result<Vec<f64>, NetworkError>
    where
        I: AsRef<[f64]>,
        D: AsRef<[f64]>,
    {
        if inputs.len() != desired_outputs.len() {
            return Err(NetworkError::SampleCountMismatch {
                inputs: inputs.len(),
                desired: desired_outputs.len(),
            });
        }
        for input in inputs {
            self.check_inputs(input.as_ref())?;
        }
        for desired in desired_outputs {
            let found = desired.as_ref().len();
            if found != self.output_count() {
                return Err(NetworkError::OutputCountMismatch {
                    expected: self.output_count(),
                    found,
                });
            }
        }
        if !self.initialized {
            return Err(NetworkError::UninitializedWeights);
        }

        let mut epoch_errors = Vec::with_capacity(config.max_epochs);
        for _ in 0..config.max_epochs {
            let mut epoch_error = 0.0;
            for (input, desired) in inputs.iter().zip(desired_outputs) {
                let desired = desired.as_ref();
                let actual = self.forward(input.as_ref());
                epoch_error += actual
                    .iter()
                    .zip(desired)
                    .map(|(a, d)| (d - a).powi(2))
                    .sum::<f64>();
                self.backpropagate(desired, config.learning_rate);
            }
            epoch_errors.push(epoch_error);
            if epoch_error == 0.0 {
                break;
            }
        }
        if config.epoch_errors == EpochErrors::ZeroPad {
            epoch_errors.resize(config.max_epochs, 0.0);
        }
        Ok(epoch_errors)
    }

    /// Returns every trainable weight, layer by layer,
    /// neuron by neuron.
    pub fn weights(&self) -> Vec<f64> {
        self.layers[1..]
            .iter()
            .flat_map(|layer| layer.iter())
            .flat_map(|neuron| neuron.weights().iter().copied())
            .collect()
    }

    /// Overwrites every trainable weight, in the
    /// order given by [`weights`](NeuralNetwork::weights).
    ///
    /// # Errors
    /// Returns an error if `weights` differs in length
    /// from [`weight_count`](NeuralNetwork::weight_count).
    pub fn set_weights(&mut self, weights: &[f64]) -> Result<(), NetworkError> {
        let expected = self.weight_count();
        if weights.len() != expected {
            return Err(NetworkError::WeightVectorMismatch {
                expected,
                found: weights.len(),
            });
        }
        let mut remaining = weights;
        for l in 1..self.layers.len() {
            let (before, after) = self.layers.split_at_mut(l);
            for neuron in after[0].iter_mut() {
                if let Some(LayerId(p)) = neuron.predecessor() {
                    let (own, rest) = remaining.split_at(before[p].len());
                    neuron.replace_weights(own);
                    remaining = rest;
                }
            }
        }
        self.initialized = true;
        Ok(())
    }

    pub(crate) fn weights_mut(&mut self) -> impl Iterator<Item = &mut f64> + '_ {
        self.layers[1..]
            .iter_mut()
            .flat_map(|layer| layer.iter_mut())
            .flat_map(|neuron| neuron.weights_mut().iter_mut())
    }

    /// Returns the number of trainable weights.
    pub fn weight_count(&self) -> usize {
        self.layers[1..]
            .iter()
            .flat_map(|layer| layer.iter())
            .filter_map(|neuron| neuron.predecessor())
            .map(|LayerId(p)| self.layers[p].len())
            .sum()
    }

    /// Returns the number of network inputs.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Returns the number of network outputs.
    pub fn output_count(&self) -> usize {
        self.layers[self.layers.len() - 1].len()
    }

    /// Returns the number of neurons in each layer, bias neurons included.
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(|layer| layer.len()).collect()
    }

    /// Returns the `index`th neuron of the `layer`th layer, if any.
    pub fn neuron(&self, layer: usize, index: usize) -> Option<&Neuron> {
        self.layers.get(layer)?.get(index)
    }

    fn check_inputs(&self, inputs: &[f64]) -> Result<(), NetworkError> {
        if inputs.len() != self.input_count {
            return Err(NetworkError::InputCountMismatch {
                expected: self.input_count,
                found: inputs.len(),
            });
        }
        Ok(())
    }

    fn forward(&mut self, inputs: &[f64]) -> Vec<f64> {
        for (neuron, value) in self.layers[0].iter_mut().zip(inputs) {
            if let Neuron::Input(input) = neuron {
                input.set_output(*value);
            }
        }
        for l in 1..self.layers.len() {
            let (before, after) = self.layers.split_at_mut(l);
            for neuron in after[0].iter_mut() {
                if let Some(LayerId(p)) = neuron.predecessor() {
                    neuron.activate(&before[p]);
                }
            }
        }
        self.layers[self.layers.len() - 1]
            .iter()
            .map(Neuron::output)
            .collect()
    }

    fn backpropagate(&mut self, desired: &[f64], learning_rate: f64) {
        let output_layer = self.layers.len() - 1;
        for (neuron, d) in self.layers[output_layer].iter_mut().zip(desired) {
            let actual = neuron.output();
            neuron.add_cost(actual - d);
        }
        for l in (1..=output_layer).rev() {
            let (before, after) = self.layers.split_at_mut(l);
            for neuron in after[0].iter_mut() {
                if let Some(LayerId(p)) = neuron.predecessor() {
                    neuron.update(&mut before[p], learning_rate);
                }
            }
        }
    }
}

/// Builds the neurons of the layer following the last one in `layers`.
fn wired_layer(
    layers: &[Box<[Neuron]>],
    spec: &[NeuronInfo],
) -> Result<Vec<Neuron>, NetworkError> {
    let layer = layers.len();
    let predecessor_size = layers[layer - 1].len();
    spec.iter()
        .enumerate()
        .map(|(neuron, info)| {
            let weights = match &info.weights {
                Some(weights) if weights.len() != predecessor_size => {
                    return Err(NetworkError::WeightCountMismatch {
                        layer,
                        neuron,
                        expected: predecessor_size,
                        found: weights.len(),
                    })
                }
                Some(weights) => weights.clone(),
                None => vec![],
            };
            Ok(Neuron::standard(
                info.activation,
                weights,
                LayerId(layer - 1),
            ))
        })
        .collect()
}

impl fmt::Display for NeuralNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.layers.len() - 1;
        for (l, layer) in self.layers.iter().enumerate() {
            let name = match l {
                0 => "input",
                l if l == last => "output",
                _ => "hidden",
            };
            let neurons: Vec<String> = layer.iter().map(Neuron::to_string).collect();
            write!(f, "{}: [{}]", name, neurons.join(", "))?;
            if l != last {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOR_INPUTS: [[f64; 3]; 8] = [
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 1.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
        [1.0, 1.0, 1.0],
    ];
    const NOR_OUTPUTS: [[f64; 1]; 8] = [
        [1.0],
        [0.0],
        [0.0],
        [0.0],
        [0.0],
        [0.0],
        [0.0],
        [0.0],
    ];
    const XOR_INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    const XOR_OUTPUTS: [[f64; 1]; 4] = [[0.0], [1.0], [1.0], [0.0]];

    fn threshold_nor() -> NeuralNetwork {
        NeuralNetwork::new(
            3,
            &[],
            &[NeuronInfo::with_weights(
                ActivationType::Threshold(0.0),
                vec![-1.0, -1.0, -1.0, 0.0],
            )],
        )
        .unwrap()
    }

    fn sigmoid_xor(seed: u64) -> NeuralNetwork {
        let mut network = NeuralNetwork::new(
            2,
            &[vec![NeuronInfo::new(ActivationType::Sigmoid); 2]],
            &[NeuronInfo::new(ActivationType::Sigmoid)],
        )
        .unwrap();
        network
            .randomize(&mut StdRng::seed_from_u64(seed), -1.0, 1.0)
            .unwrap();
        network
    }

    #[test]
    fn layers_end_with_bias() {
        let network = sigmoid_xor(0);
        assert_eq!(network.layer_sizes(), [3, 3, 1]);
        assert_eq!(network.input_count(), 2);
        assert_eq!(network.output_count(), 1);
        assert!(matches!(network.neuron(0, 2), Some(Neuron::Bias)));
        assert!(matches!(network.neuron(1, 2), Some(Neuron::Bias)));
        assert!(matches!(network.neuron(2, 0), Some(Neuron::Standard(_))));
        assert!(network.neuron(2, 1).is_none());
        assert!(network.neuron(3, 0).is_none());
        assert_eq!(
            network.neuron(2, 0).unwrap().predecessor(),
            Some(LayerId(1))
        );
        assert_eq!(
            network.to_string(),
            "input: [input, input, bias]\nhidden: [neuron, neuron, bias]\noutput: [neuron]"
        );
    }

    #[test]
    fn nor_gate() {
        let mut nor = threshold_nor();
        for (input, output) in NOR_INPUTS.iter().zip(NOR_OUTPUTS) {
            assert_eq!(nor.activate(input).unwrap(), output, "{:?}", input);
        }
    }

    #[test]
    fn adder() {
        let mut adder = NeuralNetwork::new(
            2,
            &[vec![
                NeuronInfo::with_weights(ActivationType::Threshold(0.5), vec![0.5, 0.5, 0.0]),
                NeuronInfo::with_weights(ActivationType::Threshold(1.0), vec![0.5, 0.5, 0.0]),
            ]],
            &[
                NeuronInfo::with_weights(ActivationType::Threshold(1.0), vec![0.0, 1.0, 0.0]),
                NeuronInfo::with_weights(ActivationType::Threshold(1.0), vec![1.0, -1.0, 0.0]),
            ],
        )
        .unwrap();
        // Outputs are [carry, sum].
        assert_eq!(adder.activate(&[0.0, 0.0]).unwrap(), [0.0, 0.0]);
        assert_eq!(adder.activate(&[0.0, 1.0]).unwrap(), [0.0, 1.0]);
        assert_eq!(adder.activate(&[1.0, 0.0]).unwrap(), [0.0, 1.0]);
        assert_eq!(adder.activate(&[1.0, 1.0]).unwrap(), [1.0, 0.0]);
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            NeuralNetwork::new(2, &[], &[]).unwrap_err(),
            NetworkError::EmptyOutputLayer
        );
        assert_eq!(
            NeuralNetwork::new(2, &[vec![]], &[NeuronInfo::new(ActivationType::Sigmoid)])
                .unwrap_err(),
            NetworkError::EmptyHiddenLayer(0)
        );
        let short = NeuronInfo::with_weights(ActivationType::Sigmoid, vec![1.0, 1.0]);
        assert_eq!(
            NeuralNetwork::new(2, &[], &[short]).unwrap_err(),
            NetworkError::WeightCountMismatch {
                layer: 1,
                neuron: 0,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn usage_errors() {
        let mut network = NeuralNetwork::new(
            2,
            &[vec![NeuronInfo::new(ActivationType::Sigmoid)]],
            &[NeuronInfo::new(ActivationType::Sigmoid)],
        )
        .unwrap();
        assert_eq!(
            network.activate(&[1.0, 0.0]).unwrap_err(),
            NetworkError::UninitializedWeights
        );
        assert_eq!(
            network.train(&[[1.0, 0.0]], &[[1.0]], 0.1, 10).unwrap_err(),
            NetworkError::UninitializedWeights
        );

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            network.randomize(&mut rng, 1.0, 1.0).unwrap_err(),
            NetworkError::InvalidWeightRange { min: 1.0, max: 1.0 }
        );
        assert!(network.randomize(&mut rng, f64::NEG_INFINITY, 1.0).is_err());
        network.randomize(&mut rng, -1.0, 1.0).unwrap();

        assert_eq!(
            network.activate(&[1.0]).unwrap_err(),
            NetworkError::InputCountMismatch {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            network
                .train(&[[1.0, 0.0], [0.0, 1.0]], &[[1.0]], 0.1, 10)
                .unwrap_err(),
            NetworkError::SampleCountMismatch {
                inputs: 2,
                desired: 1
            }
        );
        assert_eq!(
            network
                .train(&[[1.0, 0.0]], &[[1.0, 0.0]], 0.1, 10)
                .unwrap_err(),
            NetworkError::OutputCountMismatch {
                expected: 1,
                found: 2
            }
        );
        assert_eq!(
            network.set_weights(&[0.0; 3]).unwrap_err(),
            NetworkError::WeightVectorMismatch {
                expected: 5,
                found: 3
            }
        );
    }

    #[test]
    fn randomize_is_reproducible_and_bounded() {
        let a = sigmoid_xor(42);
        let b = sigmoid_xor(42);
        let c = sigmoid_xor(43);
        assert_eq!(a.weights(), b.weights());
        assert_ne!(a.weights(), c.weights());
        assert_eq!(a.weight_count(), 9);
        assert!(a.weights().iter().all(|w| (-1.0..1.0).contains(w)));
    }

    #[test]
    fn activation_leaves_weights_unchanged() {
        let mut network = sigmoid_xor(1);
        let before = network.weights();
        let first = network.activate(&[0.5, -0.5]).unwrap();
        network.activate(&[1.0, 1.0]).unwrap();
        assert_eq!(network.weights(), before);
        assert_eq!(network.activate(&[0.5, -0.5]).unwrap(), first);
    }

    #[test]
    fn set_weights_round_trips() {
        let mut network = NeuralNetwork::new(
            2,
            &[vec![NeuronInfo::new(ActivationType::Tanh); 2]],
            &[NeuronInfo::new(ActivationType::Identity)],
        )
        .unwrap();
        let weights: Vec<f64> = (0..9).map(|i| i as f64 / 10.0).collect();
        network.set_weights(&weights).unwrap();
        assert_eq!(network.weights(), weights);
        assert_eq!(network.neuron(1, 1).unwrap().weights(), [0.3, 0.4, 0.5]);
        assert!(network.activate(&[1.0, 2.0]).is_ok());
    }

    #[test]
    fn delta_rule_step() {
        let output = NeuronInfo::with_weights(ActivationType::Identity, vec![0.5, 0.25]);
        let mut network = NeuralNetwork::new(1, &[], &[output]).unwrap();
        // actual = 0.5 * 2 + 0.25 = 1.25, so each weight moves by
        // 0.1 * (1 - 1.25) * its input.
        let errors = network.train(&[[2.0]], &[[1.0]], 0.1, 1).unwrap();
        assert_eq!(errors, [0.0625]);
        let weights = network.weights();
        assert!((weights[0] - 0.45).abs() < 1e-12, "{:?}", weights);
        assert!((weights[1] - 0.225).abs() < 1e-12, "{:?}", weights);
    }

    #[test]
    fn exact_fit_stops_early() {
        let mut nor = threshold_nor();
        let errors = nor.train(&NOR_INPUTS, &NOR_OUTPUTS, 1.0, 50).unwrap();
        assert_eq!(errors, [0.0]);

        let padded = nor
            .train_with(
                &NOR_INPUTS,
                &NOR_OUTPUTS,
                &TrainingConfig {
                    learning_rate: 1.0,
                    max_epochs: 5,
                    epoch_errors: EpochErrors::ZeroPad,
                },
            )
            .unwrap();
        assert_eq!(padded, [0.0; 5]);
    }

    #[test]
    fn trains_nor_with_delta_rule() {
        let output = NeuronInfo::new(ActivationType::Sigmoid);
        let mut network = NeuralNetwork::new(3, &[], &[output]).unwrap();
        network
            .randomize(&mut StdRng::seed_from_u64(7), -1.0, 1.0)
            .unwrap();
        let sizes = network.layer_sizes();
        let errors = network
            .train(&NOR_INPUTS, &NOR_OUTPUTS, 1.0, 10_000)
            .unwrap();
        assert_eq!(network.layer_sizes(), sizes);
        assert_eq!(network.weight_count(), 4);
        assert!(errors.len() <= 10_000);
        assert!(*errors.last().unwrap() < 0.1, "{:?}", errors.last());
        for (input, output) in NOR_INPUTS.iter().zip(NOR_OUTPUTS) {
            let actual = network.activate(input).unwrap()[0];
            assert_eq!(actual > 0.5, output[0] > 0.5);
        }
    }

    #[test]
    fn trains_xor_with_backpropagation() {
        let mut network = sigmoid_xor(1);
        network
            .train(&XOR_INPUTS, &XOR_OUTPUTS, 20.0, 2000)
            .unwrap();
        for (input, output) in XOR_INPUTS.iter().zip(XOR_OUTPUTS) {
            let actual = network.activate(input).unwrap()[0];
            assert_eq!(actual > 0.5, output[0] > 0.5, "{:?}: {}", input, actual);
        }
    }

    #[test]
    fn backpropagation_follows_gradient() {
        let mut network = sigmoid_xor(3);
        let (input, desired) = ([0.3, -0.7], 0.8);
        let loss = |network: &mut NeuralNetwork| {
            let actual = network.activate(&input).unwrap()[0];
            0.5 * (actual - desired).powi(2)
        };

        let weights = network.weights();
        let h = 1e-6;
        let numeric: Vec<f64> = (0..weights.len())
            .map(|i| {
                let mut shifted = weights.clone();
                shifted[i] += h;
                network.set_weights(&shifted).unwrap();
                let up = loss(&mut network);
                shifted[i] -= 2.0 * h;
                network.set_weights(&shifted).unwrap();
                let down = loss(&mut network);
                (up - down) / (2.0 * h)
            })
            .collect();

        network.set_weights(&weights).unwrap();
        let learning_rate = 1e-3;
        network
            .train(&[input], &[[desired]], learning_rate, 1)
            .unwrap();
        for ((before, after), gradient) in weights.iter().zip(network.weights()).zip(numeric) {
            let step = (before - after) / learning_rate;
            assert!((step - gradient).abs() < 1e-6, "{} vs {}", step, gradient);
        }
    }
}
