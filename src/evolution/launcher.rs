use std::time::Instant;

use tracing::{debug, info, instrument, trace};

use super::options::EvolutionOptions;
use crate::error::Result;
use crate::geometry::{tour_cost, validate_coordinates, Coordinate, Route};
use crate::operators::{order_crossover_pair, random_permutation, swap_mutation};
use crate::rng::RandomNumberGenerator;
use crate::selection::{elite_indices, tournament_select};
use crate::solution::{EvolutionInfo, RunInfo, Solution};

/// Evolves a population of routes over a fixed number of generations.
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm {
    options: EvolutionOptions,
}

impl GeneticAlgorithm {
    /// Creates a new `GeneticAlgorithm` with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if any option is out of range, see
    /// [`EvolutionOptions::validate`].
    pub fn new(options: EvolutionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Evolves routes through `coords` with a generator built from the
    /// configured seed.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is NaN or infinite.
    pub fn run(&self, coords: &[Coordinate]) -> Result<Solution> {
        let mut rng = RandomNumberGenerator::from_optional_seed(self.options.get_seed());
        self.run_with_rng(coords, &mut rng)
    }

    /// Evolves routes through `coords` drawing from `rng`. The configured
    /// seed is ignored.
    #[instrument(name = "genetic_algorithm", skip_all, fields(cities = coords.len()))]
    pub fn run_with_rng(
        &self,
        coords: &[Coordinate],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Solution> {
        validate_coordinates(coords)?;

        if coords.is_empty() {
            info!("no cities to route");
            return Ok(Solution {
                route: Vec::new(),
                cost: 0.0,
                info: RunInfo::Evolution(EvolutionInfo::empty()),
            });
        }

        info!(
            population_size = self.options.get_population_size(),
            generations = self.options.get_num_generations(),
            seed = ?self.options.get_seed(),
            "starting genetic algorithm"
        );

        let solution = self.evolve(coords, rng);

        info!(
            best_cost = solution.cost,
            elapsed_ms = solution.info.elapsed().as_millis() as u64,
            "genetic algorithm finished"
        );

        Ok(solution)
    }

    fn evolve(&self, coords: &[Coordinate], rng: &mut RandomNumberGenerator) -> Solution {
        let start = Instant::now();
        let population_size = self.options.get_population_size();

        let mut population: Vec<Route> = (0..population_size)
            .map(|_| random_permutation(coords.len(), rng))
            .collect();
        let mut costs = evaluate(&population, coords);

        let fittest = best_index(&costs);
        let mut best = population[fittest].clone();
        let mut best_cost = costs[fittest];

        let mut best_cost_history = vec![best_cost];
        let mut average_cost_history = vec![mean(&costs)];

        for generation in 1..=self.options.get_num_generations() {
            population = self.next_generation(&population, &costs, rng);
            costs = evaluate(&population, coords);

            let fittest = best_index(&costs);
            if costs[fittest] < best_cost {
                best = population[fittest].clone();
                best_cost = costs[fittest];
                trace!(generation, best_cost, "new best route");
            }

            let average_cost = mean(&costs);
            best_cost_history.push(best_cost);
            average_cost_history.push(average_cost);
            debug!(generation, best_cost, average_cost, "generation done");
        }

        Solution {
            route: best,
            cost: best_cost,
            info: RunInfo::Evolution(EvolutionInfo {
                generations: self.options.get_num_generations(),
                elapsed: start.elapsed(),
                best_cost_history,
                average_cost_history,
            }),
        }
    }

    /// Elites first, then offspring of tournament winners until the
    /// population is full again.
    fn next_generation(
        &self,
        population: &[Route],
        costs: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Vec<Route> {
        let population_size = self.options.get_population_size();
        let tournament_size = self.options.get_tournament_size();
        let mutation_rate = self.options.get_mutation_rate();

        let mut next: Vec<Route> = Vec::with_capacity(population_size);
        next.extend(
            elite_indices(costs, self.options.get_elitism())
                .into_iter()
                .map(|idx| population[idx].clone()),
        );

        while next.len() < population_size {
            let parent1 = tournament_select(population, costs, tournament_size, rng);
            let parent2 = tournament_select(population, costs, tournament_size, rng);

            let (child1, child2) = if rng.gen_probability() < self.options.get_crossover_rate() {
                order_crossover_pair(&parent1, &parent2, rng)
            } else {
                (parent1, parent2)
            };

            let child1 = swap_mutation(&child1, mutation_rate, rng);
            let child2 = swap_mutation(&child2, mutation_rate, rng);

            next.push(child1);
            if next.len() < population_size {
                next.push(child2);
            }
        }

        next
    }
}

fn evaluate(population: &[Route], coords: &[Coordinate]) -> Vec<f64> {
    population
        .iter()
        .map(|route| tour_cost(route, coords))
        .collect()
}

/// Index of the first lowest cost.
fn best_index(costs: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &cost) in costs.iter().enumerate().skip(1) {
        if cost < costs[best] {
            best = idx;
        }
    }
    best
}

fn mean(costs: &[f64]) -> f64 {
    costs.iter().sum::<f64>() / costs.len() as f64
}
