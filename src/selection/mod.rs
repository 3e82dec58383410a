//! # Selection
//!
//! Cost-based selection over a population and its parallel cost vector.
//! Lower cost is always better.

pub mod elitist;
pub mod tournament;

pub use elitist::elite_indices;
pub use tournament::{tournament_select, tournament_winner};
