//! # Solutions and Run Telemetry
//!
//! Both engines return a [`Solution`]: the best route found, its cost, and a
//! [`RunInfo`] describing the run. `RunInfo` is tagged by engine so callers
//! read named fields instead of probing for keys.

use std::fmt;
use std::time::Duration;

use crate::geometry::Route;

/// Why a simulated annealing run stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The temperature dropped to the stopping temperature.
    Cooled,
    /// The total iteration budget was used up.
    IterationLimit,
    /// Too many iterations passed without improving the best route.
    Stagnated,
    /// There were no cities to route.
    Empty,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            StopReason::Cooled => "cooled",
            StopReason::IterationLimit => "iteration limit",
            StopReason::Stagnated => "stagnated",
            StopReason::Empty => "no cities",
        };
        f.write_str(reason)
    }
}

/// Telemetry of a simulated annealing run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingInfo {
    /// Neighbour evaluations performed.
    pub iterations: usize,
    pub elapsed: Duration,
    /// Temperature levels recorded in the histories.
    pub temperature_levels: usize,
    /// Best cost at the end of each temperature level.
    pub best_cost_history: Vec<f64>,
    /// Temperature of each recorded level.
    pub temperature_history: Vec<f64>,
    pub accepted_moves: usize,
    pub improving_moves: usize,
    pub final_temperature: f64,
    pub stop_reason: StopReason,
}

impl AnnealingInfo {
    pub(crate) fn empty(initial_temperature: f64) -> Self {
        Self {
            iterations: 0,
            elapsed: Duration::ZERO,
            temperature_levels: 0,
            best_cost_history: Vec::new(),
            temperature_history: Vec::new(),
            accepted_moves: 0,
            improving_moves: 0,
            final_temperature: initial_temperature,
            stop_reason: StopReason::Empty,
        }
    }
}

/// Telemetry of a genetic algorithm run.
///
/// Both histories start with the initial population and then hold one entry
/// per generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionInfo {
    pub generations: usize,
    pub elapsed: Duration,
    /// Best cost found so far, after each generation.
    pub best_cost_history: Vec<f64>,
    /// Mean population cost, after each generation.
    pub average_cost_history: Vec<f64>,
}

impl EvolutionInfo {
    pub(crate) fn empty() -> Self {
        Self {
            generations: 0,
            elapsed: Duration::ZERO,
            best_cost_history: Vec::new(),
            average_cost_history: Vec::new(),
        }
    }
}

/// Run telemetry, tagged by the engine that produced it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum RunInfo {
    Annealing(AnnealingInfo),
    Evolution(EvolutionInfo),
}

impl RunInfo {
    /// Iterations for annealing, generations for evolution.
    pub fn iterations(&self) -> usize {
        match self {
            RunInfo::Annealing(info) => info.iterations,
            RunInfo::Evolution(info) => info.generations,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            RunInfo::Annealing(info) => info.elapsed,
            RunInfo::Evolution(info) => info.elapsed,
        }
    }

    pub fn best_cost_history(&self) -> &[f64] {
        match self {
            RunInfo::Annealing(info) => &info.best_cost_history,
            RunInfo::Evolution(info) => &info.best_cost_history,
        }
    }

    pub fn best_cost_history_len(&self) -> usize {
        self.best_cost_history().len()
    }
}

impl fmt::Display for RunInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunInfo::Annealing(info) => write!(
                f,
                "Iterations: {}, temperature levels: {}, stopped: {}, time: {:.3}s",
                info.iterations,
                info.temperature_levels,
                info.stop_reason,
                info.elapsed.as_secs_f64()
            ),
            RunInfo::Evolution(info) => write!(
                f,
                "Generations: {}, history: {}, time: {:.3}s",
                info.generations,
                info.best_cost_history.len(),
                info.elapsed.as_secs_f64()
            ),
        }
    }
}

/// The outcome of a solver run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The best route found.
    pub route: Route,
    /// The cyclic length of `route`.
    pub cost: f64,
    pub info: RunInfo,
}
