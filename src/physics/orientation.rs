//! Crystallographic orientation of a traverse
//!
//! A traverse measured at angle γ to the c-axis sees the two a-axes at the
//! same angle α, with
//!
//! ```text
//! α = acos(sin γ · cos 45°)
//! ```
//!
//! The diffusivity along the traverse is the `cos²`-weighted sum of the
//! axis-aligned diffusivities.

use std::f64::consts::FRAC_PI_4;

/// Angle between c-axis and traverse for the reference apatite section (°)
pub const APATITE_GAMMA_DEG: f64 = 17.7;

/// Orientation of a measured traverse relative to the crystal axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrystalOrientation {
    /// Angle between c-axis and traverse γ (°)
    gamma_deg: f64,
    /// Angle between each a-axis and traverse α (°)
    alfa_deg: f64,
}

impl CrystalOrientation {
    /// Build the orientation from the c-axis / traverse angle γ (°)
    pub fn from_gamma(gamma_deg: f64) -> Self {
        let alfa_deg = (gamma_deg.to_radians().sin() * FRAC_PI_4.cos())
            .acos()
            .to_degrees();
        Self { gamma_deg, alfa_deg }
    }

    /// Reference section: γ = 17.7°
    pub fn apatite_traverse() -> Self {
        Self::from_gamma(APATITE_GAMMA_DEG)
    }

    /// c-axis / traverse angle γ (°)
    pub fn gamma_deg(&self) -> f64 {
        self.gamma_deg
    }

    /// a-axis / traverse angle α (°)
    pub fn alfa_deg(&self) -> f64 {
        self.alfa_deg
    }

    /// Weight cos²(α) applied to each a-axis diffusivity
    pub fn a_axis_weight(&self) -> f64 {
        self.alfa_deg.to_radians().cos().powi(2)
    }

    /// Weight cos²(γ) applied to the c-axis diffusivity
    pub fn c_axis_weight(&self) -> f64 {
        self.gamma_deg.to_radians().cos().powi(2)
    }
}

impl Default for CrystalOrientation {
    fn default() -> Self {
        Self::apatite_traverse()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
