use serde::{Deserialize, Serialize};

/// An ActivationType represents the activation
/// function a neuron applies to its weighted input sum,
/// together with the derivative used during training.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ActivationType {
    // 1 / (1 + exp(-x))
    Sigmoid,
    // x
    Identity,
    // 0   if x < 0
    // x   if x ≥ 0
    ReLU,
    // 0.01x   if x < 0
    // x       if x ≥ 0
    LeakyReLU,
    // tanh(x)
    Tanh,
    // 1   if x ≥ t
    // 0   otherwise
    Threshold(f64),
    /// A user-supplied function and its derivative.
    /// Cannot be serialized.
    #[serde(skip)]
    Custom {
        function: fn(f64) -> f64,
        derivative: fn(f64) -> f64,
    },
}

const LEAKY_SLOPE: f64 = 0.01;

impl ActivationType {
    /// Applies the activation function to `x`.
    ///
    /// # Examples
    /// ```
    /// use darwinian_nn::networks::ActivationType;
    ///
    /// assert_eq!(ActivationType::Sigmoid.apply(0.0), 0.5);
    /// assert_eq!(ActivationType::Threshold(0.5).apply(0.5), 1.0);
    /// assert_eq!(ActivationType::LeakyReLU.apply(-2.0), -0.02);
    /// ```
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Self::Sigmoid => sigmoid(x),
            Self::Identity => x,
            Self::ReLU => x.max(0.0),
            Self::LeakyReLU => x.max(LEAKY_SLOPE * x),
            Self::Tanh => x.tanh(),
            Self::Threshold(t) => {
                if x >= *t {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Custom { function, .. } => function(x),
        }
    }

    /// Returns the derivative of the activation function at `x`.
    ///
    /// Step functions are treated as having a
    /// zero derivative everywhere.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Self::Sigmoid => {
                let s = sigmoid(x);
                s * (1.0 - s)
            }
            Self::Identity => 1.0,
            Self::ReLU => {
                if x >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::LeakyReLU => {
                if x >= 0.0 {
                    1.0
                } else {
                    LEAKY_SLOPE
                }
            }
            Self::Tanh => 1.0 - x.tanh().powi(2),
            Self::Threshold(_) => 0.0,
            Self::Custom { derivative, .. } => derivative(x),
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
