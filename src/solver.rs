//! # Solver Entry Points
//!
//! Flat functions taking every parameter positionally, for callers that do
//! not want to assemble option structs, plus the [`Method`] selector used by
//! the command-line driver.
//!
//! ```rust
//! use salesman::geometry::Coordinate;
//! use salesman::solver::genetic_algorithm;
//!
//! let square: Vec<Coordinate> =
//!     vec![(0.0, 0.0).into(), (1.0, 0.0).into(), (1.0, 1.0).into(), (0.0, 1.0).into()];
//!
//! let solution = genetic_algorithm(&square, 30, 100, 0.9, 0.02, 1, 3, Some(0)).unwrap();
//! assert_eq!(solution.cost, 4.0);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::annealing::{AnnealingOptions, SimulatedAnnealing};
use crate::error::{Result, TspError};
use crate::evolution::{EvolutionOptions, GeneticAlgorithm};
use crate::geometry::Coordinate;
use crate::solution::Solution;

/// The optimization method to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Simulated annealing, selected with `"sa"`.
    Annealing,
    /// Genetic algorithm, selected with `"ga"`.
    Genetic,
}

impl FromStr for Method {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sa" => Ok(Method::Annealing),
            "ga" => Ok(Method::Genetic),
            _ => Err(TspError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Annealing => f.write_str("sa"),
            Method::Genetic => f.write_str("ga"),
        }
    }
}

/// Runs simulated annealing over `coords`.
///
/// # Errors
///
/// Returns an error if a parameter is out of range or a coordinate is not finite.
pub fn simulated_annealing(
    coords: &[Coordinate],
    initial_temperature: f64,
    alpha: f64,
    stopping_temperature: f64,
    iterations_per_temperature: usize,
    max_iterations: usize,
    seed: Option<u64>,
) -> Result<Solution> {
    let mut options = AnnealingOptions::new(
        initial_temperature,
        alpha,
        stopping_temperature,
        iterations_per_temperature,
        max_iterations,
    );
    options.set_seed(seed);

    SimulatedAnnealing::new(options)?.run(coords)
}

/// Runs the genetic algorithm over `coords`.
///
/// # Errors
///
/// Returns an error if a parameter is out of range or a coordinate is not finite.
#[allow(clippy::too_many_arguments)]
pub fn genetic_algorithm(
    coords: &[Coordinate],
    population_size: usize,
    generations: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    elitism: usize,
    tournament_size: usize,
    seed: Option<u64>,
) -> Result<Solution> {
    let mut options = EvolutionOptions::new(
        population_size,
        generations,
        crossover_rate,
        mutation_rate,
        elitism,
        tournament_size,
    );
    options.set_seed(seed);

    GeneticAlgorithm::new(options)?.run(coords)
}
