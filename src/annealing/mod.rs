//! # Simulated Annealing
//!
//! A single-route search that proposes 2-opt neighbours and accepts worse
//! ones with the Metropolis probability `exp(-delta / T)`. The temperature
//! follows a geometric schedule, one step per batch of
//! `iterations_per_temperature` proposals.
//!
//! ## Example
//!
//! ```rust
//! use salesman::annealing::{AnnealingOptions, SimulatedAnnealing};
//! use salesman::geometry::Coordinate;
//!
//! let coords: Vec<Coordinate> = vec![(0.0, 0.0).into(), (4.0, 0.0).into(), (4.0, 3.0).into()];
//! let options = AnnealingOptions::builder()
//!     .initial_temperature(10.0)
//!     .max_iterations(1_000)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//!
//! let solution = SimulatedAnnealing::new(options).unwrap().run(&coords).unwrap();
//! assert!((solution.cost - 12.0).abs() < 1e-9);
//! ```

pub mod engine;
pub mod options;

pub use engine::{acceptance_probability, SimulatedAnnealing, STAGNATION_LIMIT};
pub use options::{AnnealingOptions, AnnealingOptionsBuilder};
