use std::error::Error;
use std::fmt;

/// An error type indicating an invalid network
/// topology, or data of the wrong shape.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Networks need at least one output neuron.
    EmptyOutputLayer,
    /// A hidden layer was specified without neurons.
    EmptyHiddenLayer(usize),
    /// A neuron was given a number of weights different
    /// from the size of its predecessor layer.
    WeightCountMismatch {
        layer: usize,
        neuron: usize,
        expected: usize,
        found: usize,
    },
    /// The network was used before its weights were set.
    UninitializedWeights,
    /// The number of inputs differs from the network's input count.
    InputCountMismatch { expected: usize, found: usize },
    /// A desired output row differs from the network's output count.
    OutputCountMismatch { expected: usize, found: usize },
    /// Training inputs and desired outputs differ in number.
    SampleCountMismatch { inputs: usize, desired: usize },
    /// Weight bounds must be finite, with `min < max`.
    InvalidWeightRange { min: f64, max: f64 },
    /// A flat weight vector differs in length
    /// from the network's weight count.
    WeightVectorMismatch { expected: usize, found: usize },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOutputLayer => write!(f, "network has no output neurons"),
            Self::EmptyHiddenLayer(layer) => write!(f, "hidden layer {} has no neurons", layer),
            Self::WeightCountMismatch {
                layer,
                neuron,
                expected,
                found,
            } => write!(
                f,
                "neuron {} of layer {} has {} weights, expected {}",
                neuron, layer, found, expected
            ),
            Self::UninitializedWeights => {
                write!(f, "network weights used before initialization")
            }
            Self::InputCountMismatch { expected, found } => {
                write!(f, "got {} inputs, network has {}", found, expected)
            }
            Self::OutputCountMismatch { expected, found } => write!(
                f,
                "got {} desired outputs, network has {}",
                found, expected
            ),
            Self::SampleCountMismatch { inputs, desired } => write!(
                f,
                "got {} training inputs but {} desired outputs",
                inputs, desired
            ),
            Self::InvalidWeightRange { min, max } => {
                write!(f, "invalid weight range [{}, {})", min, max)
            }
            Self::WeightVectorMismatch { expected, found } => write!(
                f,
                "got {} weights, network has {}",
                found, expected
            ),
        }
    }
}

impl Error for NetworkError {}
