//! A generic generational evolutionary algorithm with
//! pluggable selection strategies.
//!
//! Any type can be evolved by implementing the [`PopMember`] trait,
//! which describes its fitness and genetic operators. An
//! [`EvolutionaryAlgorithm`] then repeatedly selects parents with a
//! [`SelectionStrategy`], recombines them, keeps the best members of
//! each generation unchanged (elitism) and mutates the rest, until a
//! user-supplied stop condition holds.
//!
//! Bit-string genomes are supplied through [`GroupedBits`], and
//! per-generation statistics can be recorded with the [`logging`]
//! module. A neural-network member is supplied by the `darwinian-nn`
//! crate.
//!
//! All randomness comes from a caller-owned [`rand::Rng`], so a fixed
//! seed makes a run reproducible.
//!
//! # Example usage: maximizing the number of set bits
//! ```
//! use darwinian::{
//!     EvolutionaryAlgorithm, EvolutionConfig, GroupedBits, PopMember, SelectionTournament,
//! };
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//! use std::num::NonZeroUsize;
//!
//! #[derive(Clone)]
//! struct OneMax(GroupedBits);
//!
//! impl PopMember for OneMax {
//!     fn evaluate_fitness(&self) -> f64 {
//!         self.0.bits().iter().filter(|b| **b).count() as f64
//!     }
//!
//!     fn crossover<R: Rng + ?Sized>(&self, other: &Self, _: &mut R) -> Vec<Self> {
//!         vec![
//!             OneMax(self.0.crossover(&other.0)),
//!             OneMax(other.0.crossover(&self.0)),
//!         ]
//!     }
//!
//!     fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
//!         self.0.mutate(1.0 / 32.0, rng);
//!     }
//! }
//!
//! fn main() {
//!     let config = EvolutionConfig {
//!         population_size: NonZeroUsize::new(50).unwrap(),
//!         elite_count: 2,
//!     };
//!     let selection = SelectionTournament::new(4, 0.9).unwrap();
//!     let mut algorithm = EvolutionaryAlgorithm::new(config, selection, |rng: &mut StdRng| {
//!         OneMax(GroupedBits::random(&[8, 8, 8, 8], rng))
//!     })
//!     .stop_when(|generation, population| generation == 200 || population[0].fitness() == 32.0)
//!     .on_generation(|generation, population| {
//!         if generation % 50 == 0 {
//!             println!("generation {}: best {}", generation, population[0].fitness());
//!         }
//!     });
//!
//!     match algorithm.run(&mut StdRng::seed_from_u64(0)) {
//!         Ok(population) => println!("champion: {}", population[0].inner().0),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

mod bits;
mod evolution;
pub mod logging;
mod member;
pub mod selection;

pub use bits::GroupedBits;
pub use evolution::{EvolutionConfig, EvolutionError, EvolutionaryAlgorithm, Population};
pub use member::{Member, PopMember};
pub use selection::{
    SelectionError, SelectionRoulette, SelectionStrategy, SelectionTournament, SelectionTruncate,
};
