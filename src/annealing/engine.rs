use std::time::Instant;

use tracing::{debug, info, instrument, trace};

use super::options::AnnealingOptions;
use crate::error::Result;
use crate::geometry::{tour_cost, validate_coordinates, Coordinate, Route};
use crate::operators::{random_permutation, reverse_segment};
use crate::rng::RandomNumberGenerator;
use crate::solution::{AnnealingInfo, RunInfo, Solution, StopReason};

/// Non-improving iterations tolerated since the last new best route. The
/// check runs once per temperature level.
pub const STAGNATION_LIMIT: usize = 5000;

/// Metropolis probability of accepting a move that changes the cost by `delta`.
///
/// Moves that do not make the route longer are always accepted.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        return 1.0;
    }
    (-delta / temperature).exp()
}

/// A simulated annealing solver.
///
/// Simulated annealing is a probabilistic local search algorithm that allows
/// moves to worse solutions with a probability that decreases over time.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing {
    options: AnnealingOptions,
}

impl SimulatedAnnealing {
    /// Creates a new simulated annealing solver with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if any option is out of range, see
    /// [`AnnealingOptions::validate`].
    pub fn new(options: AnnealingOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &AnnealingOptions {
        &self.options
    }

    /// Anneals a route through `coords` with a generator built from the
    /// configured seed.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is NaN or infinite.
    pub fn run(&self, coords: &[Coordinate]) -> Result<Solution> {
        let mut rng = RandomNumberGenerator::from_optional_seed(self.options.get_seed());
        self.run_with_rng(coords, &mut rng)
    }

    /// Anneals a route through `coords` drawing from `rng`. The configured
    /// seed is ignored.
    #[instrument(name = "simulated_annealing", skip_all, fields(cities = coords.len()))]
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
                info: RunInfo::Annealing(AnnealingInfo::empty(
                    self.options.get_initial_temperature(),
                )),
            });
        }

        info!(
            initial_temperature = self.options.get_initial_temperature(),
            alpha = self.options.get_alpha(),
            seed = ?self.options.get_seed(),
            "starting simulated annealing"
        );

        let solution = self.anneal(coords, rng);

        if let RunInfo::Annealing(run) = &solution.info {
            info!(
                best_cost = solution.cost,
                iterations = run.iterations,
                temperature_levels = run.temperature_levels,
                elapsed_ms = run.elapsed.as_millis() as u64,
                stop_reason = %run.stop_reason,
                "simulated annealing finished"
            );
        }

        Ok(solution)
    }

    fn anneal(&self, coords: &[Coordinate], rng: &mut RandomNumberGenerator) -> Solution {
        let start = Instant::now();
        let n = coords.len();
        let max_iterations = self.options.get_max_iterations();

        let mut current = random_permutation(n, rng);
        let mut current_cost = tour_cost(&current, coords);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = self.options.get_initial_temperature();
        let mut iterations = 0usize;
        let mut stagnation = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut best_cost_history = Vec::new();
        let mut temperature_history = Vec::new();

        let stop_reason = loop {
            if iterations >= max_iterations {
                break StopReason::IterationLimit;
            }
            if temperature <= self.options.get_stopping_temperature() {
                break StopReason::Cooled;
            }

            for _ in 0..self.options.get_iterations_per_temperature() {
                let neighbor = propose_neighbor(&current, rng);
                let neighbor_cost = tour_cost(&neighbor, coords);
                let delta = neighbor_cost - current_cost;

                let accept = delta < 0.0
                    || rng.gen_probability() < acceptance_probability(delta, temperature);

                if accept {
                    accepted_moves += 1;
                    if delta < 0.0 {
                        improving_moves += 1;
                    }

                    current = neighbor;
                    current_cost = neighbor_cost;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                        stagnation = 0;
                        trace!(iteration = iterations, best_cost, "new best route");
                    } else {
                        stagnation += 1;
                    }
                } else {
                    stagnation += 1;
                }

                iterations += 1;
                if iterations >= max_iterations {
                    break;
                }
            }

            best_cost_history.push(best_cost);
            temperature_history.push(temperature);
            debug!(
                level = best_cost_history.len(),
                temperature,
                best_cost,
                current_cost,
                "temperature level done"
            );

            if stagnation > STAGNATION_LIMIT {
                break StopReason::Stagnated;
            }

            temperature *= self.options.get_alpha();
        };

        Solution {
            route: best,
            cost: best_cost,
            info: RunInfo::Annealing(AnnealingInfo {
                iterations,
                elapsed: start.elapsed(),
                temperature_levels: best_cost_history.len(),
                best_cost_history,
                temperature_history,
                accepted_moves,
                improving_moves,
                final_temperature: temperature,
                stop_reason,
            }),
        }
    }
}

/// Picks `0 <= i < n - 1` and `i < k < n` and reverses `[i, k]`. A single
/// city has no other neighbour than itself.
fn propose_neighbor(current: &[usize], rng: &mut RandomNumberGenerator) -> Route {
    let n = current.len();
    if n < 2 {
        return current.to_vec();
    }

    let i = rng.gen_index(n - 1);
    let k = rng.gen_range(i + 1..n);
    reverse_segment(current, i, k)
}
