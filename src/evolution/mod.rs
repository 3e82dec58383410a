//! # Genetic Algorithm
//!
//! A generational genetic algorithm over permutation routes: elitism,
//! tournament selection, order crossover and swap mutation, run for a fixed
//! number of generations.

pub mod launcher;
pub mod options;

pub use launcher::GeneticAlgorithm;
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
