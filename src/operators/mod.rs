//! # Route Operators
//!
//! Neighbourhood moves and variation operators on permutation routes. Every
//! operator reads its inputs by reference and returns a freshly allocated
//! route, so callers never observe a shared route changing under them.
//!
//! - [`random_permutation`]: a uniformly shuffled route
//! - [`reverse_segment`]: the 2-opt move used by simulated annealing
//! - [`order_crossover`] / [`order_crossover_pair`]: Davis' order crossover (OX)
//! - [`swap_mutation`]: per-gene swap mutation

pub mod crossover;
pub mod mutation;
pub mod permutation;

pub use crossover::{order_crossover, order_crossover_pair, order_crossover_with_segment};
pub use mutation::swap_mutation;
pub use permutation::{is_permutation, random_permutation, reverse_segment};
