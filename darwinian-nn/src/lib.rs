//! A layered feed-forward neural network trained by back-propagation,
//! and a network-weights implementation of the
//! [`Darwinian`](darwinian) crate's `PopMember` trait.
//!
//! # Example usage: training a XOR network
//! ```
//! use darwinian_nn::networks::{ActivationType, NeuralNetwork, NeuronInfo};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! fn main() {
//!     let mut network = NeuralNetwork::new(
//!         2,
//!         &[vec![NeuronInfo::new(ActivationType::Sigmoid); 2]],
//!         &[NeuronInfo::new(ActivationType::Sigmoid)],
//!     )
//!     .unwrap();
//!     network.randomize(&mut StdRng::seed_from_u64(0), -1.0, 1.0).unwrap();
//!
//!     let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
//!     let desired = [[0.0], [1.0], [1.0], [0.0]];
//!     match network.train(&inputs, &desired, 20.0, 2000) {
//!         Ok(errors) => println!("final error: {}", errors[errors.len() - 1]),
//!         Err(e) => eprintln!("{}", e),
//!     }
//!     for input in &inputs {
//!         println!("{:?} -> {:?}", input, network.activate(input).unwrap());
//!     }
//! }
//! ```

pub mod networks;
pub mod neuroevolution;
