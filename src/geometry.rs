//! # Geometry
//!
//! Euclidean distance and tour cost. A tour is cyclic: the last city of a
//! route connects back to the first one.
//!
//! ```rust
//! use salesman::geometry::{tour_cost, Coordinate};
//!
//! let square = [
//!     Coordinate::new(0.0, 0.0),
//!     Coordinate::new(1.0, 0.0),
//!     Coordinate::new(1.0, 1.0),
//!     Coordinate::new(0.0, 1.0),
//! ];
//!
//! assert_eq!(tour_cost(&[0, 1, 2, 3], &square), 4.0);
//! ```

use crate::error::{Result, TspError};

/// An ordered visit of city indices. A valid route is a permutation of
/// `0..n` where `n` is the number of cities.
pub type Route = Vec<usize>;

/// A point on the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two coordinates.
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Total length of the closed tour visiting `coords` in `route` order.
///
/// Routes with fewer than two cities cost nothing.
///
/// # Panics
///
/// Panics if `route` holds an index outside of `coords`.
pub fn tour_cost(route: &[usize], coords: &[Coordinate]) -> f64 {
    let n = route.len();
    if n <= 1 {
        return 0.0;
    }

    (0..n)
        .map(|i| distance(&coords[route[i]], &coords[route[(i + 1) % n]]))
        .sum()
}

/// Rejects coordinate sets containing NaN or infinity.
pub fn validate_coordinates(coords: &[Coordinate]) -> Result<()> {
    match coords.iter().position(|c| !c.is_finite()) {
        Some(idx) => Err(TspError::InvalidNumericValue(format!(
            "city {} has non-finite coordinates ({}, {})",
            idx, coords[idx].x, coords[idx].y
        ))),
        None => Ok(()),
    }
}
