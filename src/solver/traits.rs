//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - [`Solver`]: stable interface, one `solve` call per run
//! - [`SolverConfiguration`]: the numerical parameters of one run
//! - [`ConcentrationField`]: the complete output, one column per time step
//! - [`SimulationObserver`]: progress reporting and cooperative cancellation
//!
//! A solver never decides whether its inputs are stable; it receives an
//! already accepted [`StabilityRatio`] and uses it as its coefficient.

use nalgebra::{DMatrix, DVector};

use crate::error::{Result, TimingError};
use crate::solver::scenario::Scenario;
use crate::solver::stability::StabilityRatio;

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Numerical parameters of one simulation
///
/// # Examples
///
/// ```rust
/// use aptimer::solver::{SolverConfiguration, StabilityRatio};
///
/// let stability = StabilityRatio::analyze(5.687e-6, 8000.0, 0.5).unwrap();
/// let config = SolverConfiguration::new(stability, 8000.0, 250);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_time(), 2.0e6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SolverConfiguration {
    /// Accepted stability ratio, the FTCS coefficient
    pub stability: StabilityRatio,
    /// Time step (s)
    pub delta_t: f64,
    /// Number of time steps (`t_itr`)
    pub iterations: usize,
}

impl SolverConfiguration {
    pub fn new(stability: StabilityRatio, delta_t: f64, iterations: usize) -> Self {
        Self {
            stability,
            delta_t,
            iterations,
        }
    }

    /// Simulated physical time (s)
    pub fn total_time(&self) -> f64 {
        self.delta_t * self.iterations as f64
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
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
        Ok(())
    }
}

// =================================================================================================
// Concentration field
// =================================================================================================

/// Concentration at every model point and every time step
///
/// Shape `points x (iterations + 1)`: row `i` is a model position, column `j`
/// the profile after `j` steps. Column 0 is the initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationField {
    data: DMatrix<f64>,
}

impl ConcentrationField {
    /// Wrap a solver-produced matrix
    pub fn from_matrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    /// Number of model points (rows)
    pub fn points(&self) -> usize {
        self.data.nrows()
    }

    /// Number of time steps taken (columns minus the initial one)
    pub fn iterations(&self) -> usize {
        self.data.ncols().saturating_sub(1)
    }

    /// Profile after `step` steps, as a contiguous slice
    ///
    /// # Panics
    ///
    /// When `step > iterations()`.
    pub fn column(&self, step: usize) -> &[f64] {
        let n = self.data.nrows();
        &self.data.as_slice()[step * n..(step + 1) * n]
    }

    /// Profile after `step` steps, as an owned vector
    pub fn profile(&self, step: usize) -> DVector<f64> {
        self.data.column(step).into_owned()
    }

    /// Last simulated profile
    pub fn final_profile(&self) -> DVector<f64> {
        self.profile(self.iterations())
    }

    /// Concentration at model point `point` after `step` steps
    pub fn value(&self, point: usize, step: usize) -> f64 {
        self.data[(point, step)]
    }

    /// Underlying matrix
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.data
    }
}

// =================================================================================================
// Observer
// =================================================================================================

/// Receives progress once per completed step
///
/// Observers run synchronously inside the step loop and must return quickly.
/// They can never influence the computed values, only whether the loop goes
/// on.
pub trait SimulationObserver {
    /// `fraction` is `(j + 1) / iterations` after step `j`; the last call is 1.0
    fn on_progress(&mut self, fraction: f64);

    /// Polled after each step; `true` stops the run with
    /// [`TimingError::Cancelled`]
    fn should_stop(&self) -> bool {
        false
    }
}

impl<F: FnMut(f64)> SimulationObserver for F {
    fn on_progress(&mut self, fraction: f64) {
        self(fraction)
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Time-stepping solver
///
/// # Contract
///
/// - validates `config` and `scenario` before allocating anything
/// - returns a field of shape `points x (iterations + 1)`
/// - keeps the end cells at `left`/`right` in every column
/// - is deterministic: same inputs, bit-identical field
pub trait Solver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
        observer: Option<&mut dyn SimulationObserver>,
    ) -> Result<ConcentrationField>;

    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn stability() -> StabilityRatio {
        StabilityRatio::analyze(0.1, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_configuration_validation() {
        assert!(SolverConfiguration::new(stability(), 1.0, 10).validate().is_ok());
        assert!(SolverConfiguration::new(stability(), 0.0, 10).validate().is_err());
        assert!(SolverConfiguration::new(stability(), f64::NAN, 10).validate().is_err());

        let err = SolverConfiguration::new(stability(), 1.0, 0).validate().unwrap_err();
        assert!(matches!(err, TimingError::Configuration { parameter: "iterations", .. }));
    }

    #[test]
    fn test_field_accessors() {
        // 3 points, 2 steps; column-major
        let matrix =
            DMatrix::from_column_slice(3, 3, &[1.0, 0.0, 0.5, 1.0, 0.1, 0.5, 1.0, 0.2, 0.5]);
        let field = ConcentrationField::from_matrix(matrix);

        assert_eq!(field.points(), 3);
        assert_eq!(field.iterations(), 2);
        assert_eq!(field.column(1), &[1.0, 0.1, 0.5]);
        assert_eq!(field.value(1, 2), 0.2);
        assert_eq!(field.final_profile()[1], 0.2);
        assert_eq!(field.profile(0).as_slice(), field.column(0));
    }

    #[test]
    fn test_closure_is_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |f: f64| seen.push(f);
            let obs: &mut dyn SimulationObserver = &mut observer;
            obs.on_progress(0.5);
            obs.on_progress(1.0);
            assert!(!obs.should_stop());
        }
        assert_eq!(seen, vec![0.5, 1.0]);
    }
}
