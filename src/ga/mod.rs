//! Genetic algorithm for stop sequencing.
//!
//! Each individual is a [`Chromosome`]: a permutation tour with its open-path
//! distance and fitness `1 / (distance + 1)`.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generations, mutation rate, elitism
//! - [`GeneticOptimizer`]: executes the evolutionary loop
//!
//! # Operators
//!
//! - [`initial_population`]: Fisher–Yates random permutations
//! - [`tournament_select`]: best of `k` random draws
//! - [`order_crossover`]: OX, presence-marked in O(n)
//! - [`swap_mutation`]: exchange two positions
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
pub mod operators;
mod population;
mod runner;
mod selection;

pub use chromosome::Chromosome;
pub use config::GaConfig;
pub use operators::{order_crossover, swap_mutation};
pub use population::{initial_population, random_tour};
pub use runner::GeneticOptimizer;
pub use selection::{tournament_select, DEFAULT_TOURNAMENT_SIZE};
