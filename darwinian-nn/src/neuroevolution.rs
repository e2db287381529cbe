//! Evolution of the weights of fixed-topology networks.
//!
//! A [`NetworkMember`] wraps a [`NeuralNetwork`] whose weights act as
//! its genome, so that networks can be trained by a
//! [`darwinian::EvolutionaryAlgorithm`] instead of back-propagation.
mod config;

pub use config::NeuroevolutionConfig;

use crate::networks::{NetworkError, NeuralNetwork};

use darwinian::PopMember;
use rand::Rng;

use std::fmt;
use std::mem;
use std::rc::Rc;

/// A problem that networks are evolved to solve.
///
/// Closures taking a `&mut NeuralNetwork` and
/// returning a score implement this trait.
pub trait NetworkTask {
    /// Scores a network. Higher is better.
    fn score(&self, network: &mut NeuralNetwork) -> f64;
}

impl<F> NetworkTask for F
where
    F: Fn(&mut NeuralNetwork) -> f64,
{
    fn score(&self, network: &mut NeuralNetwork) -> f64 {
        self(network)
    }
}

/// A population member whose genes are the
/// weights of a fixed-topology network.
///
/// Every member of a population shares the same task and
/// configuration, and must share the same network topology.
pub struct NetworkMember<T> {
    network: NeuralNetwork,
    task: Rc<T>,
    config: Rc<NeuroevolutionConfig>,
}

impl<T: NetworkTask> NetworkMember<T> {
    /// Returns a member with `template`'s topology and weights
    /// drawn uniformly within the configured weight bound.
    ///
    /// # Errors
    /// Returns an error if the weight bound is not positive and finite.
    ///
    /// # Examples
    /// ```
    /// use darwinian::PopMember;
    /// use darwinian_nn::networks::{ActivationType, NeuralNetwork, NeuronInfo};
    /// use darwinian_nn::neuroevolution::{NetworkMember, NeuroevolutionConfig};
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use std::rc::Rc;
    ///
    /// let template = NeuralNetwork::new(1, &[], &[NeuronInfo::new(ActivationType::Identity)]).unwrap();
    /// // Rewards networks whose output for 1 is close to 3.
    /// let task = Rc::new(|network: &mut NeuralNetwork| -(network.activate(&[1.0]).unwrap()[0] - 3.0).abs());
    /// let config = Rc::new(NeuroevolutionConfig {
    ///     weight_bound: 5.0,
    ///     ..NeuroevolutionConfig::zero()
    /// });
    ///
    /// let member = NetworkMember::random(&template, task, config, &mut StdRng::seed_from_u64(0)).unwrap();
    /// assert!(member.evaluate_fitness() <= 0.0);
    /// ```
    pub fn random<R: Rng + ?Sized>(
        template: &NeuralNetwork,
        task: Rc<T>,
        config: Rc<NeuroevolutionConfig>,
        rng: &mut R,
    ) -> Result<NetworkMember<T>, NetworkError> {
        config.validate()?;
        let mut network = template.clone();
        network.randomize(rng, -config.weight_bound, config.weight_bound)?;
        Ok(NetworkMember {
            network,
            task,
            config,
        })
    }

    /// Returns the member's network.
    pub fn network(&self) -> &NeuralNetwork {
        &self.network
    }

    /// Unwraps the member's network.
    pub fn into_network(self) -> NeuralNetwork {
        self.network
    }

    /// Returns the task the member is scored on.
    pub fn task(&self) -> &T {
        &self.task
    }

    /// Returns the shared configuration.
    pub fn config(&self) -> &NeuroevolutionConfig {
        &self.config
    }
}

impl<T: NetworkTask> PopMember for NetworkMember<T> {
    /// Scores a copy of the network, leaving the member untouched.
    fn evaluate_fitness(&self) -> f64 {
        self.task.score(&mut self.network.clone())
    }

    /// Returns two children, each taking every weight from one parent
    /// or the other at random, with the second child receiving the
    /// weights the first did not.
    ///
    /// # Panics
    /// Panics if the parents' networks have different layer sizes.
    fn crossover<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> Vec<Self> {
        assert_eq!(
            self.network.layer_sizes(),
            other.network.layer_sizes(),
            "crossover of networks with different topologies"
        );
        let mut first = self.clone();
        let mut second = other.clone();
        for (a, b) in first
            .network
            .weights_mut()
            .zip(second.network.weights_mut())
        {
            if rng.gen::<bool>() {
                mem::swap(a, b);
            }
        }
        vec![first, second]
    }

    /// Nudges each weight, with the configured chance, by a uniform
    /// amount of at most the change rate, then clamps it to the bound.
    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let NeuroevolutionConfig {
            change_chance,
            change_rate,
            weight_bound,
        } = *self.config;
        for weight in self.network.weights_mut() {
            if rng.gen::<f64>() < change_chance {
                *weight += change_rate * (2.0 * rng.gen::<f64>() - 1.0);
                *weight = weight.max(-weight_bound).min(weight_bound);
            }
        }
    }
}

impl<T> Clone for NetworkMember<T> {
    fn clone(&self) -> Self {
        NetworkMember {
            network: self.network.clone(),
            task: Rc::clone(&self.task),
            config: Rc::clone(&self.config),
        }
    }
}

impl<T> fmt::Debug for NetworkMember<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkMember")
            .field("network", &self.network)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
