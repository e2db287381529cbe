use super::ActivationType;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use std::fmt;

/// Index of a layer inside a [`NeuralNetwork`].
///
/// [`NeuralNetwork`]: crate::networks::NeuralNetwork
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub usize);

/// A trainable neuron, wired to every neuron
/// of its predecessor layer.
#[derive(Clone, Debug)]
pub struct StandardNeuron {
    sum: f64,
    output: f64,
    cost: f64,
    weights: Vec<f64>,
    activation: ActivationType,
    predecessor: LayerId,
}

/// A neuron whose output is set from outside the network.
#[derive(Clone, Debug, Default)]
pub struct InputNeuron {
    output: f64,
}

impl InputNeuron {
    /// Sets the value the neuron will output.
    pub fn set_output(&mut self, value: f64) {
        self.output = value;
    }
}

/// A single unit in a layer.
///
/// Bias and input neurons have no predecessors, so every
/// operation besides [`output`](Neuron::output) is a no-op on them.
#[derive(Clone, Debug)]
pub enum Neuron {
    Standard(StandardNeuron),
    /// Always outputs 1.
    Bias,
    Input(InputNeuron),
}

impl Neuron {
    /// Returns a standard neuron wired to `predecessor`. The weights
    /// may be left empty, to be filled in by randomization.
    pub(crate) fn standard(
        activation: ActivationType,
        weights: Vec<f64>,
        predecessor: LayerId,
    ) -> Neuron {
        Neuron::Standard(StandardNeuron {
            sum: 0.0,
            output: 0.0,
            cost: 0.0,
            weights,
            activation,
            predecessor,
        })
    }

    /// Returns an input neuron outputting 0.
    pub(crate) fn input() -> Neuron {
        Neuron::Input(InputNeuron::default())
    }

    /// Returns the output computed by the last activation.
    pub fn output(&self) -> f64 {
        match self {
            Self::Standard(n) => n.output,
            Self::Bias => 1.0,
            Self::Input(n) => n.output,
        }
    }

    /// Returns the weighted input sum computed by the last activation.
    /// Bias and input neurons report 0.
    pub fn sum(&self) -> f64 {
        match self {
            Self::Standard(n) => n.sum,
            _ => 0.0,
        }
    }

    /// Returns the neuron's incoming weights, one per predecessor.
    pub fn weights(&self) -> &[f64] {
        match self {
            Self::Standard(n) => &n.weights,
            _ => &[],
        }
    }

    /// Returns the neuron's activation function, if it has one.
    pub fn activation(&self) -> Option<ActivationType> {
        match self {
            Self::Standard(n) => Some(n.activation),
            _ => None,
        }
    }

    /// Returns the layer the neuron's inputs come from.
    pub fn predecessor(&self) -> Option<LayerId> {
        match self {
            Self::Standard(n) => Some(n.predecessor),
            _ => None,
        }
    }

    pub(crate) fn weights_mut(&mut self) -> &mut [f64] {
        match self {
            Self::Standard(n) => &mut n.weights,
            _ => &mut [],
        }
    }

    pub(crate) fn replace_weights(&mut self, weights: &[f64]) {
        if let Self::Standard(n) = self {
            n.weights.clear();
            n.weights.extend_from_slice(weights);
        }
    }

    /// Replaces the weights with one uniform value
    /// in `[min, max)` per predecessor.
    pub(crate) fn randomize_weights<R: Rng + ?Sized>(
        &mut self,
        predecessor_count: usize,
        distribution: &Uniform<f64>,
        rng: &mut R,
    ) {
        if let Self::Standard(n) = self {
            n.weights.clear();
            n.weights
                .extend((0..predecessor_count).map(|_| distribution.sample(rng)));
        }
    }

    /// Computes the weighted sum of the predecessors' outputs
    /// and applies the activation function to it.
    ///
    /// The predecessors must have been activated already.
    pub(crate) fn activate(&mut self, predecessors: &[Neuron]) {
        if let Self::Standard(n) = self {
            n.sum = n
                .weights
                .iter()
                .zip(predecessors)
                .map(|(w, p)| w * p.output())
                .sum();
            n.output = n.activation.apply(n.sum);
        }
    }

    /// Accumulates back-propagated error.
    pub(crate) fn add_cost(&mut self, delta: f64) {
        if let Self::Standard(n) = self {
            n.cost += delta;
        }
    }

    /// Propagates the accumulated cost to the predecessors, adjusts
    /// the weights by gradient descent, and resets the cost.
    ///
    /// Must follow an activation, so that `sum` and the
    /// predecessors' outputs belong to the current example.
    pub(crate) fn update(&mut self, predecessors: &mut [Neuron], learning_rate: f64) {
        if let Self::Standard(n) = self {
            let gradient = n.cost * n.activation.derivative(n.sum);
            for (weight, predecessor) in n.weights.iter_mut().zip(predecessors.iter_mut()) {
                predecessor.add_cost(gradient * *weight);
                *weight -= predecessor.output() * learning_rate * gradient;
            }
            n.cost = 0.0;
        }
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(_) => write!(f, "neuron"),
            Self::Bias => write!(f, "bias"),
            Self::Input(_) => write!(f, "input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn inputs(values: &[f64]) -> Vec<Neuron> {
        values
            .iter()
            .map(|v| {
                let mut neuron = Neuron::input();
                if let Neuron::Input(n) = &mut neuron {
                    n.set_output(*v);
                }
                neuron
            })
            .chain(std::iter::once(Neuron::Bias))
            .collect()
    }

    #[test]
    fn bias_is_inert() {
        let mut bias = Neuron::Bias;
        let mut predecessors = inputs(&[3.0]);
        bias.activate(&predecessors);
        bias.add_cost(5.0);
        bias.update(&mut predecessors, 1.0);
        bias.randomize_weights(4, &Uniform::new(-1.0, 1.0), &mut StdRng::seed_from_u64(0));
        assert_eq!(bias.output(), 1.0);
        assert!(bias.weights().is_empty());
        assert_eq!(predecessors[0].output(), 3.0);
    }

    #[test]
    fn input_keeps_its_output() {
        let mut input = inputs(&[0.25]).remove(0);
        input.activate(&[]);
        input.update(&mut [], 1.0);
        assert_eq!(input.output(), 0.25);
    }

    #[test]
    fn activation_is_weighted_sum() {
        let predecessors = inputs(&[1.0, 2.0]);
        let mut neuron =
            Neuron::standard(ActivationType::Identity, vec![0.5, -1.0, 0.25], LayerId(0));
        neuron.activate(&predecessors);
        assert_eq!(neuron.sum(), -1.25);
        assert_eq!(neuron.output(), -1.25);
    }

    #[test]
    fn update_uses_pre_update_weights() {
        let mut predecessors = vec![
            Neuron::standard(ActivationType::Identity, vec![], LayerId(0)),
            Neuron::Bias,
        ];
        let mut neuron = Neuron::standard(ActivationType::Identity, vec![2.0, 1.0], LayerId(1));
        neuron.activate(&predecessors);
        neuron.add_cost(0.5);
        neuron.update(&mut predecessors, 0.1);

        // Gradient 0.5 * 1.0, propagated through the old weight 2.0.
        match &predecessors[0] {
            Neuron::Standard(n) => assert_eq!(n.cost, 1.0),
            _ => unreachable!(),
        }
        // The first predecessor outputs 0, so only the bias weight moves.
        assert_eq!(neuron.weights()[0], 2.0);
        assert!((neuron.weights()[1] - 0.95).abs() < 1e-12);
        match &neuron {
            Neuron::Standard(n) => assert_eq!(n.cost, 0.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn randomized_weights_are_in_range() {
        let mut neuron = Neuron::standard(ActivationType::Sigmoid, vec![], LayerId(0));
        let distribution = Uniform::new(-0.5, 0.5);
        neuron.randomize_weights(10, &distribution, &mut StdRng::seed_from_u64(1));
        assert_eq!(neuron.weights().len(), 10);
        assert!(neuron.weights().iter().all(|w| (-0.5..0.5).contains(w)));
    }
}
