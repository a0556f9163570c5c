//! Stability gate for the explicit scheme
//!
//! The forward-time centred-space update is stable only when
//!
//! ```text
//! s = D · Δt / Δx² <= 0.5
//! ```
//!
//! The ratio is checked once, before any time step is taken, and is never
//! adjusted: an unstable discretization is reported to the caller, who picks
//! a smaller `delta_t` or a coarser `delta_x`.

use crate::error::{Result, TimingError};

/// Largest accepted ratio (inclusive)
pub const STABILITY_LIMIT: f64 = 0.5;

/// Accepted stability ratio, used as the recurrence coefficient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityRatio {
    value: f64,
}

impl StabilityRatio {
    /// Raw ratio `D · Δt / Δx²`, no check
    pub fn compute(diffusivity: f64, delta_t: f64, delta_x: f64) -> f64 {
        diffusivity * delta_t / (delta_x * delta_x)
    }

    /// Compute and gate the ratio
    ///
    /// # Errors
    ///
    /// [`TimingError::Instability`] when the ratio exceeds
    /// [`STABILITY_LIMIT`] or is NaN.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aptimer::solver::StabilityRatio;
    ///
    /// let ok = StabilityRatio::analyze(5.687e-6, 8000.0, 0.5).unwrap();
    /// assert!(ok.value() < 0.5);
    ///
    /// assert!(StabilityRatio::analyze(5.687e-6, 80000.0, 0.5).is_err());
    /// ```
    pub fn analyze(diffusivity: f64, delta_t: f64, delta_x: f64) -> Result<Self> {
        let value = Self::compute(diffusivity, delta_t, delta_x);

        // written as a negated `<=` so NaN is rejected too
        if !(value <= STABILITY_LIMIT) {
            log::warn!(
                "Unstable discretization: ratio {value:.4} > {STABILITY_LIMIT} (dt = {delta_t}, dx = {delta_x})"
            );
            return Err(TimingError::Instability {
                ratio: value,
                delta_t,
                delta_x,
            });
        }

        log::debug!("Stability ratio {value:.5} accepted");
        Ok(Self { value })
    }

    /// The ratio itself
    pub fn value(&self) -> f64 {
        self.value
    }

    /// How much of the stable range is used, in `[0, 1]` for a positive ratio
    pub fn margin_used(&self) -> f64 {
        self.value / STABILITY_LIMIT
    }
}

/// Largest `delta_t` that keeps the scheme stable for `diffusivity` and `delta_x`
pub fn max_stable_delta_t(diffusivity: f64, delta_x: f64) -> f64 {
    STABILITY_LIMIT * delta_x * delta_x / diffusivity
}

// =================================================================================================
// Tests
// =================================================================================================
