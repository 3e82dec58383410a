//! # AnnealingOptions
//!
//! Configuration of a simulated annealing run: the geometric cooling
//! schedule, the iteration budget and the optional seed.
//!
//! The initial temperature has no default and must always be supplied.
//!
//! ```rust
//! use salesman::annealing::AnnealingOptions;
//!
//! let options = AnnealingOptions::builder()
//!     .initial_temperature(50.0)
//!     .alpha(0.99)
//!     .iterations_per_temperature(200)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_alpha(), 0.99);
//! assert!(AnnealingOptions::builder().build().is_err());
//! ```

use crate::error::{Result, TspError};

pub const DEFAULT_ALPHA: f64 = 0.995;
pub const DEFAULT_STOPPING_TEMPERATURE: f64 = 1e-3;
pub const DEFAULT_ITERATIONS_PER_TEMPERATURE: usize = 100;
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingOptions {
    initial_temperature: f64,
    /// Geometric cooling factor, `T <- alpha * T`.
    alpha: f64,
    stopping_temperature: f64,
    iterations_per_temperature: usize,
    /// Hard budget on neighbour evaluations.
    max_iterations: usize,
    seed: Option<u64>,
}

impl AnnealingOptions {
    pub fn new(
        initial_temperature: f64,
        alpha: f64,
        stopping_temperature: f64,
        iterations_per_temperature: usize,
        max_iterations: usize,
    ) -> Self {
        Self {
            initial_temperature,
            alpha,
            stopping_temperature,
            iterations_per_temperature,
            max_iterations,
            seed: None,
        }
    }

    /// Library defaults for everything but the initial temperature.
    pub fn with_initial_temperature(initial_temperature: f64) -> Self {
        Self::new(
            initial_temperature,
            DEFAULT_ALPHA,
            DEFAULT_STOPPING_TEMPERATURE,
            DEFAULT_ITERATIONS_PER_TEMPERATURE,
            DEFAULT_MAX_ITERATIONS,
        )
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn get_initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }

    pub fn get_stopping_temperature(&self) -> f64 {
        self.stopping_temperature
    }

    pub fn get_iterations_per_temperature(&self) -> usize {
        self.iterations_per_temperature
    }

    pub fn get_max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_initial_temperature(&mut self, initial_temperature: f64) {
        self.initial_temperature = initial_temperature;
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    pub fn set_stopping_temperature(&mut self, stopping_temperature: f64) {
        self.stopping_temperature = stopping_temperature;
    }

    pub fn set_iterations_per_temperature(&mut self, iterations_per_temperature: usize) {
        self.iterations_per_temperature = iterations_per_temperature;
    }

    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Checks every value against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `initial_temperature` is not a positive finite number
    /// - `alpha` is not strictly between 0 and 1
    /// - `stopping_temperature` is negative or not finite
    /// - `iterations_per_temperature` is 0
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(TspError::invalid(
                "initial_temperature",
                format!(
                    "must be a positive finite number, got {}",
                    self.initial_temperature
                ),
            ));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(TspError::invalid(
                "alpha",
                format!("must be in (0, 1), got {}", self.alpha),
            ));
        }
        if !(self.stopping_temperature.is_finite() && self.stopping_temperature >= 0.0) {
            return Err(TspError::invalid(
                "stopping_temperature",
                format!(
                    "must be a non-negative finite number, got {}",
                    self.stopping_temperature
                ),
            ));
        }
        if self.iterations_per_temperature == 0 {
            return Err(TspError::invalid(
                "iterations_per_temperature",
                "must be at least 1, got 0",
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating an `AnnealingOptions` instance.
    pub fn builder() -> AnnealingOptionsBuilder {
        AnnealingOptionsBuilder::default()
    }
}

/// Builder for `AnnealingOptions`.
#[derive(Debug, Clone, Default)]
pub struct AnnealingOptionsBuilder {
    initial_temperature: Option<f64>,
    alpha: Option<f64>,
    stopping_temperature: Option<f64>,
    iterations_per_temperature: Option<usize>,
    max_iterations: Option<usize>,
    seed: Option<u64>,
}

impl AnnealingOptionsBuilder {
    pub fn initial_temperature(mut self, value: f64) -> Self {
        self.initial_temperature = Some(value);
        self
    }

    pub fn alpha(mut self, value: f64) -> Self {
        self.alpha = Some(value);
        self
    }

    pub fn stopping_temperature(mut self, value: f64) -> Self {
        self.stopping_temperature = Some(value);
        self
    }

    pub fn iterations_per_temperature(mut self, value: usize) -> Self {
        self.iterations_per_temperature = Some(value);
        self
    }

    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Builds the `AnnealingOptions` instance.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::MissingParameter`] if no initial temperature was set.
    /// Range checks happen later, in [`AnnealingOptions::validate`].
    pub fn build(self) -> Result<AnnealingOptions> {
        let initial_temperature = self
            .initial_temperature
            .ok_or(TspError::MissingParameter("initial_temperature"))?;

        Ok(AnnealingOptions {
            initial_temperature,
            alpha: self.alpha.unwrap_or(DEFAULT_ALPHA),
            stopping_temperature: self
                .stopping_temperature
                .unwrap_or(DEFAULT_STOPPING_TEMPERATURE),
            iterations_per_temperature: self
                .iterations_per_temperature
                .unwrap_or(DEFAULT_ITERATIONS_PER_TEMPERATURE),
            max_iterations: self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let options = AnnealingOptions::builder()
            .initial_temperature(50.0)
            .build()
            .unwrap();

        assert_eq!(options, AnnealingOptions::with_initial_temperature(50.0));
        assert_eq!(options.get_alpha(), DEFAULT_ALPHA);
        assert_eq!(options.get_stopping_temperature(), DEFAULT_STOPPING_TEMPERATURE);
        assert_eq!(
            options.get_iterations_per_temperature(),
            DEFAULT_ITERATIONS_PER_TEMPERATURE
        );
        assert_eq!(options.get_max_iterations(), DEFAULT_MAX_ITERATIONS);
        assert_eq!(options.get_seed(), None);
    }

    #[test]
    fn test_builder_requires_initial_temperature() {
        let result = AnnealingOptions::builder().alpha(0.9).build();
        assert_eq!(
            result,
            Err(TspError::MissingParameter("initial_temperature"))
        );
    }

    #[test]
    fn test_builder_overrides() {
        let options = AnnealingOptions::builder()
            .initial_temperature(10.0)
            .alpha(0.9)
            .stopping_temperature(0.5)
            .iterations_per_temperature(7)
            .max_iterations(70)
            .seed(3)
            .build()
            .unwrap();

        assert_eq!(
            options,
            AnnealingOptions::new(10.0, 0.9, 0.5, 7, 70).with_seed(3)
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealingOptions::with_initial_temperature(50.0)
            .validate()
            .is_ok());
        // A zero budget is valid.
        assert!(AnnealingOptions::new(50.0, 0.9, 0.0, 1, 0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_parameter() {
        let cases = [
            (AnnealingOptions::new(0.0, 0.9, 1e-3, 10, 10), "initial_temperature"),
            (AnnealingOptions::new(f64::NAN, 0.9, 1e-3, 10, 10), "initial_temperature"),
            (AnnealingOptions::new(50.0, 0.0, 1e-3, 10, 10), "alpha"),
            (AnnealingOptions::new(50.0, 1.0, 1e-3, 10, 10), "alpha"),
            (AnnealingOptions::new(50.0, 0.9, -1.0, 10, 10), "stopping_temperature"),
            (AnnealingOptions::new(50.0, 0.9, 1e-3, 0, 10), "iterations_per_temperature"),
        ];

        for (options, expected) in cases {
            match options.validate() {
                Err(TspError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected {} to be rejected, got {:?}", expected, other),
            }
        }
    }
}
