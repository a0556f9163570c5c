//! Initial and boundary concentrations
//!
//! The traverse is modelled with Dirichlet boundaries: the first and last
//! model points are held at `left` and `right` for the whole run while every
//! interior point starts at `initial`. No ordering between the three values is
//! assumed; uphill and downhill profiles are both valid.

use std::fmt;

use crate::data::MeasuredProfile;
use crate::error::{Result, TimingError};

/// Default interior concentration
pub const DEFAULT_INITIAL: f64 = 0.96;
/// Default concentration held at the first model point
pub const DEFAULT_LEFT: f64 = 1.2;
/// Default concentration held at the last model point
pub const DEFAULT_RIGHT: f64 = 0.96;

/// Initial interior value plus fixed end values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryConditions {
    /// Interior concentration at step 0
    pub initial: f64,
    /// Concentration at the first model point
    pub left: f64,
    /// Concentration at the last model point
    pub right: f64,
}

impl BoundaryConditions {
    pub fn new(initial: f64, left: f64, right: f64) -> Self {
        Self {
            initial,
            left,
            right,
        }
    }

    /// Same value everywhere: the field never changes
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Left end at the highest measured concentration, right end at `initial`
    ///
    /// Reproduces the conditions the measurement workflow proposes when a
    /// profile is first loaded.
    pub fn from_profile(profile: &MeasuredProfile, initial: f64) -> Self {
        Self::new(initial, profile.max_concentration(), initial)
    }

    /// All three values must be finite
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("initial", self.initial),
            ("left", self.left),
            ("right", self.right),
        ] {
            if !value.is_finite() {
                return Err(TimingError::configuration(
                    "boundaries",
                    format!("{name} concentration must be finite, got {value}"),
                ));
            }
        }
        Ok(())
    }

    /// True when no concentration gradient exists anywhere
    pub fn is_flat(&self) -> bool {
        self.initial == self.left && self.initial == self.right
    }
}

impl Default for BoundaryConditions {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL, DEFAULT_LEFT, DEFAULT_RIGHT)
    }
}

impl fmt::Display for BoundaryConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "initial = {}, left = {}, right = {}",
            self.initial, self.left, self.right
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
