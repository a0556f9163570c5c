//! Chlorine diffusion in apatite
//!
//! Effective diffusivity along a traverse cut at γ = 17.7° to the c-axis:
//!
//! ```text
//! D_tra = cos²(α)·D_a1 + cos²(α)·D_a2 + cos²(γ)·D_c
//! ```
//!
//! | Axis | D0 (m²/s) | Ea (J/mol) | Source |
//! |------|-----------|------------|--------|
//! | a (and b) | 1.3e-9 | 216 000 | Brenan |
//! | c | 5.1e-5 | 290 000 | experimental |
//!
//! # Example
//!
//! ```rust
//! use aptimer::models::ApatiteChlorine;
//! use aptimer::physics::DiffusivityModel;
//!
//! let model = ApatiteChlorine::new();
//! let d_tra = model.diffusivity(900.0);
//! assert!(d_tra > 5.6e-6 && d_tra < 5.8e-6);
//! ```

use crate::physics::{ArrheniusLaw, CrystalOrientation, DiffusivityModel};

/// a-axis (and b-axis) law, Brenan
pub const CL_A_AXIS: ArrheniusLaw = ArrheniusLaw::new(1.3e-9, 216_000.0);

/// c-axis law
pub const CL_C_AXIS: ArrheniusLaw = ArrheniusLaw::new(5.1e-5, 290_000.0);

/// Axis-aligned diffusivities at one temperature \[µm²/s\]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDiffusivities {
    /// Along the first a-axis
    pub a1: f64,
    /// Along the second a-axis (b-axis)
    pub a2: f64,
    /// Along the c-axis
    pub c: f64,
}

/// Chlorine-in-apatite diffusivity model
#[derive(Debug, Clone)]
pub struct ApatiteChlorine {
    a_axis: ArrheniusLaw,
    c_axis: ArrheniusLaw,
    orientation: CrystalOrientation,
}

impl ApatiteChlorine {
    /// Reference model: published laws, γ = 17.7°
    pub fn new() -> Self {
        Self {
            a_axis: CL_A_AXIS,
            c_axis: CL_C_AXIS,
            orientation: CrystalOrientation::apatite_traverse(),
        }
    }

    /// Same laws on a differently oriented section
    pub fn with_orientation(mut self, orientation: CrystalOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Section orientation
    pub fn orientation(&self) -> &CrystalOrientation {
        &self.orientation
    }

    /// Unweighted axis diffusivities at `temperature_c`
    pub fn axis_diffusivities(&self, temperature_c: f64) -> AxisDiffusivities {
        let a = self.a_axis.diffusivity_um2(temperature_c);
        AxisDiffusivities {
            a1: a,
            a2: a,
            c: self.c_axis.diffusivity_um2(temperature_c),
        }
    }
}

impl Default for ApatiteChlorine {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffusivityModel for ApatiteChlorine {
    fn diffusivity(&self, temperature_c: f64) -> f64 {
        let axes = self.axis_diffusivities(temperature_c);
        let wa = self.orientation.a_axis_weight();
        let wc = self.orientation.c_axis_weight();

        let d_tra = wa * axes.a1 + wa * axes.a2 + wc * axes.c;

        log::debug!(
            "Cl-apatite at {temperature_c} °C: D_a = {:e}, D_c = {:e}, D_tra = {:e} um2/s",
            axes.a1,
            axes.c,
            d_tra
        );

        d_tra
    }

    fn name(&self) -> &str {
        "Cl in apatite"
    }

    fn description(&self) -> Option<&str> {
        Some("Arrhenius a/c-axis laws weighted by traverse orientation")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
