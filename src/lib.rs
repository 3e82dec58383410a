pub mod annealing;
pub mod cities;
pub mod error;
pub mod evolution;
pub mod geometry;
pub mod operators;
pub mod rng;
pub mod selection;
pub mod solution;
pub mod solver;

// Re-export commonly used types for convenience
pub use annealing::{AnnealingOptions, SimulatedAnnealing};
pub use error::{Result, TspError};
pub use evolution::{EvolutionOptions, GeneticAlgorithm};
pub use geometry::{Coordinate, Route};
pub use solution::{RunInfo, Solution};
pub use solver::{genetic_algorithm, simulated_annealing, Method};
