//! Run configuration
//!
//! Everything one timing estimate needs besides the measured profile and the
//! diffusivity model. The caller owns the value and passes it in explicitly;
//! nothing is kept between runs.
//!
//! # Fields
//!
//! | Field | Default | Unit |
//! |-------|---------|------|
//! | `temperature_c` | 900 | °C |
//! | `delta_x` | 0.5 | µm |
//! | `delta_t` | 8000 | s |
//! | `iterations` | 250 | steps |
//! | `boundaries` | 0.96 / 1.2 / 0.96 | initial / left / right |
//! | `uncertainty` | 0.02 | concentration |
//!
//! # Example
//!
//! ```rust
//! use aptimer::config::TimingConfiguration;
//!
//! let config = TimingConfiguration::default()
//!     .temperature(950.0)
//!     .delta_t(4000.0)
//!     .iterations(500);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.total_time(), 2.0e6);
//! ```

use crate::error::{Result, TimingError};
use crate::solver::BoundaryConditions;

/// Parameters of one timing estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfiguration {
    /// Process temperature (°C)
    pub temperature_c: f64,
    /// Model grid spacing (µm)
    pub delta_x: f64,
    /// Time step (s)
    pub delta_t: f64,
    /// Number of time steps (`t_itr`)
    pub iterations: usize,
    /// Initial interior and fixed end concentrations
    pub boundaries: BoundaryConditions,
    /// Half-width of the match window applied to every measured point
    pub uncertainty: f64,
}

impl Default for TimingConfiguration {
    fn default() -> Self {
        Self {
            temperature_c: 900.0,
            delta_x: 0.5,
            delta_t: 8000.0,
            iterations: 250,
            boundaries: BoundaryConditions::default(),
            uncertainty: 0.02,
        }
    }
}

impl TimingConfiguration {
    pub fn temperature(mut self, temperature_c: f64) -> Self {
        self.temperature_c = temperature_c;
        self
    }

    pub fn delta_x(mut self, delta_x: f64) -> Self {
        self.delta_x = delta_x;
        self
    }

    pub fn delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = delta_t;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn boundaries(mut self, boundaries: BoundaryConditions) -> Self {
        self.boundaries = boundaries;
        self
    }

    pub fn uncertainty(mut self, uncertainty: f64) -> Self {
        self.uncertainty = uncertainty;
        self
    }

    /// Simulated physical time (s)
    pub fn total_time(&self) -> f64 {
        self.delta_t * self.iterations as f64
    }

    /// Check every parameter; the first problem found is returned
    pub fn validate(&self) -> Result<()> {
        if !self.temperature_c.is_finite() {
            return Err(TimingError::configuration(
                "temperature_c",
                format!("must be finite, got {}", self.temperature_c),
            ));
        }
        if !self.delta_x.is_finite() || self.delta_x <= 0.0 {
            return Err(TimingError::configuration(
                "delta_x",
                format!("must be a positive finite number, got {}", self.delta_x),
            ));
        }
        if !self.delta_t.is_finite() || self.delta_t <= 0.0 {
            return Err(TimingError::configuration(
                "delta_t",
                format!("must be a positive finite number, got {}", self.delta_t),
            ));
        }
        if self.iterations == 0 {
            return Err(TimingError::configuration(
                "iterations",
                "must be greater than 0",
            ));
        }
        if !self.uncertainty.is_finite() || self.uncertainty < 0.0 {
            return Err(TimingError::configuration(
                "uncertainty",
                format!("must be finite and >= 0, got {}", self.uncertainty),
            ));
        }
        self.boundaries.validate()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
