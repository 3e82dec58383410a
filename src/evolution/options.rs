//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration options for the
//! genetic algorithm. It includes parameters such as the number of generations,
//! the population size, the variation rates and the selection pressure.
//!
//! ## Example
//!
//! ```rust
//! use salesman::evolution::EvolutionOptions;
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(50, 200, 0.8, 0.05, 2, 4);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 100);
//! ```
//!
//! ## Fields
//!
//! - `population_size`: The number of routes kept in every generation.
//! - `num_generations`: The number of generations to evolve.
//! - `crossover_rate`: Probability that a pair of parents is recombined.
//! - `mutation_rate`: Per-gene probability of a swap mutation.
//! - `elitism`: The number of best routes copied unchanged into the next generation.
//! - `tournament_size`: The number of distinct candidates drawn per tournament.
//! - `seed`: Optional seed for reproducible runs.

use crate::error::{Result, TspError};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    num_generations: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    elitism: usize,
    tournament_size: usize,
    seed: Option<u64>,
}

impl EvolutionOptions {
    pub fn new(
        population_size: usize,
        num_generations: usize,
        crossover_rate: f64,
        mutation_rate: f64,
        elitism: usize,
        tournament_size: usize,
    ) -> Self {
        Self {
            population_size,
            num_generations,
            crossover_rate,
            mutation_rate,
            elitism,
            tournament_size,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_elitism(&self) -> usize {
        self.elitism
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_elitism(&mut self, elitism: usize) {
        self.elitism = elitism;
    }

    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Checks every value against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `population_size` is 0
    /// - `elitism` exceeds `population_size`
    /// - `crossover_rate` or `mutation_rate` is outside `[0, 1]`
    /// - `tournament_size` is 0 or exceeds `population_size`
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(TspError::invalid(
                "population_size",
                "must be at least 1, got 0",
            ));
        }
        if self.elitism > self.population_size {
            return Err(TspError::invalid(
                "elitism",
                format!(
                    "must not exceed population_size ({}), got {}",
                    self.population_size, self.elitism
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(TspError::invalid(
                "crossover_rate",
                format!("must be in [0, 1], got {}", self.crossover_rate),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::invalid(
                "mutation_rate",
                format!("must be in [0, 1], got {}", self.mutation_rate),
            ));
        }
        if self.tournament_size == 0 {
            return Err(TspError::invalid(
                "tournament_size",
                "must be at least 1, got 0",
            ));
        }
        if self.tournament_size > self.population_size {
            return Err(TspError::invalid(
                "tournament_size",
                format!(
                    "must not exceed population_size ({}), got {}",
                    self.population_size, self.tournament_size
                ),
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// This provides a more flexible way to configure evolution options
    /// with a fluent interface.
    ///
    /// # Example
    ///
    /// ```rust
    /// use salesman::evolution::EvolutionOptions;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .population_size(30)
    ///     .num_generations(100)
    ///     .tournament_size(2)
    ///     .seed(0)
    ///     .build();
    ///
    /// assert_eq!(options.get_crossover_rate(), 0.9);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_generations: 500,
            crossover_rate: 0.9,
            mutation_rate: 0.02,
            elitism: 1,
            tournament_size: 3,
            seed: None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    num_generations: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    elitism: Option<usize>,
    tournament_size: Option<usize>,
    seed: Option<u64>,
}

impl EvolutionOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn elitism(mut self, value: usize) -> Self {
        self.elitism = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(default.population_size),
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            crossover_rate: self.crossover_rate.unwrap_or(default.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            elitism: self.elitism.unwrap_or(default.elitism),
            tournament_size: self.tournament_size.unwrap_or(default.tournament_size),
            seed: self.seed,
        }
    }
}
