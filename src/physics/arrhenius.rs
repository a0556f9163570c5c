//! Arrhenius temperature dependence
//!
//! ```text
//! D(T) = D0 · exp(-Ea / (R · (T + 273.15)))
//! ```
//!
//! with `D0` in m²/s, `Ea` in J/mol and `T` in °C. The result is reported in
//! µm²/s, the unit used by the spatial grid.

use super::{CELSIUS_TO_KELVIN, GAS_CONSTANT, M2_TO_UM2};

/// Single-pathway Arrhenius diffusivity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrheniusLaw {
    /// Pre-exponential factor D0 \[m²/s\]
    pre_exponential: f64,
    /// Activation energy Ea \[J/mol\]
    activation_energy: f64,
}

impl ArrheniusLaw {
    /// Create a law from its pre-exponential factor (m²/s) and activation
    /// energy (J/mol)
    pub const fn new(pre_exponential: f64, activation_energy: f64) -> Self {
        Self {
            pre_exponential,
            activation_energy,
        }
    }

    /// Pre-exponential factor D0 \[m²/s\]
    pub fn pre_exponential(&self) -> f64 {
        self.pre_exponential
    }

    /// Activation energy Ea \[J/mol\]
    pub fn activation_energy(&self) -> f64 {
        self.activation_energy
    }

    /// Diffusivity in m²/s at `temperature_c` (°C)
    ///
    /// No validation: a temperature at or below absolute zero yields a
    /// non-physical value (infinite or huge), which the stability gate will
    /// then judge like any other coefficient.
    #[inline]
    pub fn diffusivity_m2(&self, temperature_c: f64) -> f64 {
        let kelvin = temperature_c + CELSIUS_TO_KELVIN;
        self.pre_exponential * (-self.activation_energy / (GAS_CONSTANT * kelvin)).exp()
    }

    /// Diffusivity in µm²/s at `temperature_c` (°C)
    #[inline]
    pub fn diffusivity_um2(&self, temperature_c: f64) -> f64 {
        self.diffusivity_m2(temperature_c) * M2_TO_UM2
    }
}

// =================================================================================================
// Tests
// =================================================================================================
