//! Uniform random city sets.

use crate::error::{Result, TspError};
use crate::geometry::Coordinate;
use crate::rng::RandomNumberGenerator;

/// Side length of the square the command-line driver samples cities in.
pub const DEFAULT_EXTENT: f64 = 100.0;

/// Samples `count` cities uniformly in `[0, extent) x [0, extent)`.
///
/// # Errors
///
/// Returns an error if `extent` is not a positive finite number.
pub fn generate_cities(
    count: usize,
    extent: f64,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Coordinate>> {
    if !(extent.is_finite() && extent > 0.0) {
        return Err(TspError::invalid(
            "extent",
            format!("must be a positive finite number, got {}", extent),
        ));
    }

    Ok((0..count)
        .map(|_| {
            let x = rng.gen_uniform(0.0, extent);
            let y = rng.gen_uniform(0.0, extent);
            Coordinate::new(x, y)
        })
        .collect())
}
