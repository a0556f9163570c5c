//! Diffusivity model trait
//!
//! A diffusivity model turns a temperature into the effective diffusion
//! coefficient along the measured traverse. It is the only physics input of
//! the explicit solver.

// ==================================================================================================
// Diffusivity Model Trait
// =================================================================================================

/// Trait for diffusivity models
///
/// # Responsibility
/// Computes the effective traverse diffusivity at a given temperature.
/// Does NOT discretize or integrate anything (that's the Solver's job).
///
/// # Units
/// Temperature in °C, diffusivity in µm²/s (the grid unit is µm and the time
/// step unit is s).
///
/// # Validation
/// Implementations do not validate the temperature. A non-physical input
/// yields a non-physical coefficient, and the stability gate decides.
pub trait DiffusivityModel: Send + Sync {
    /// Effective diffusivity along the traverse \[µm²/s\]
    fn diffusivity(&self, temperature_c: f64) -> f64;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================
