//! Forward-time centred-space diffusion solver
//!
//! # Mathematical Background
//!
//! One-dimensional diffusion with constant diffusivity,
//!
//! ```text
//! ∂c/∂t = D ∂²c/∂x²
//! ```
//!
//! discretized explicitly with `s = D·Δt/Δx²`:
//!
//! ```text
//! c[i, j+1] = s · (c[i-1, j] + c[i+1, j] - 2·c[i, j]) + c[i, j]
//! ```
//!
//! # Characteristics
//!
//! - **Order**: first order in time, second order in space
//! - **Stability**: conditional, `s <= 0.5` (checked before the solver runs)
//! - **Boundaries**: Dirichlet, `left`/`right` reasserted at every step
//! - **Memory**: the whole field is kept, `points x (iterations + 1)`
//!
//! # Example
//!
//! ```rust
//! use aptimer::solver::{
//!     BoundaryConditions, FtcsSolver, Scenario, SimulationGrid, Solver,
//!     SolverConfiguration, StabilityRatio,
//! };
//!
//! let grid = SimulationGrid::build(10.0, 1.0).unwrap();
//! let scenario = Scenario::new(grid, BoundaryConditions::new(0.0, 1.0, 0.0));
//! let stability = StabilityRatio::analyze(0.25, 1.0, 1.0).unwrap();
//! let config = SolverConfiguration::new(stability, 1.0, 100);
//!
//! let field = FtcsSolver::new().solve(&scenario, &config, None).unwrap();
//! assert_eq!(field.iterations(), 100);
//! assert_eq!(field.value(0, 100), 1.0);
//! ```

use nalgebra::DMatrix;

use crate::error::{Result, TimingError};
use crate::solver::{
    ConcentrationField, Scenario, SimulationObserver, Solver, SolverConfiguration,
};

// =================================================================================================
// FTCS Solver
// =================================================================================================

/// Explicit FTCS diffusion solver
///
/// # Algorithm
///
/// 1. Fill the field with `initial`
/// 2. For each step `j = 0 .. iterations-1`:
///    - set `c[0, j] = left`, `c[n-1, j] = right`
///    - compute interior `c[i, j+1]` from column `j`
///    - set the ends of column `j+1`
///    - report `(j+1)/iterations` to the observer, stop if asked
/// 3. Return the field
///
/// With the `parallel` feature the interior update of one step is spread over
/// rayon workers once the grid has more than
/// [`parallel_threshold()`](crate::solver::parallel_threshold) points. Each
/// cell is computed from the previous column only, so both paths give
/// bit-identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct FtcsSolver;

impl FtcsSolver {
    /// Create a new FTCS solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use aptimer::solver::{FtcsSolver, Solver};
    ///
    /// let solver = FtcsSolver::new();
    /// assert_eq!(solver.name(), "FTCS");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

/// Advance one step: interior of `next` from `prev`
///
/// `prev` and `next` have the same length `n >= 3`; ends are left untouched.
/// Grids with more than `threshold` points take the rayon path when the
/// `parallel` feature is compiled in.
fn step_interior(prev: &[f64], next: &mut [f64], s: f64, threshold: usize) {
    let n = prev.len();

    let cell = |i: usize| -> f64 { s * (prev[i - 1] + prev[i + 1] - 2.0 * prev[i]) + prev[i] };

    if n > threshold {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            next[1..n - 1]
                .par_iter_mut()
                .enumerate()
                .for_each(|(k, c)| *c = cell(k + 1));
        }
        // parallel feature not compiled in: fall through to sequential
        #[cfg(not(feature = "parallel"))]
        {
            for i in 1..n - 1 {
                next[i] = cell(i);
            }
        }
    } else {
        for i in 1..n - 1 {
            next[i] = cell(i);
        }
    }
}

impl Solver for FtcsSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
        mut observer: Option<&mut dyn SimulationObserver>,
    ) -> Result<ConcentrationField> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        // ====== Step 2: Setup ======

        let n = scenario.points();
        let iterations = config.iterations;
        let s = config.stability.value();
        let bc = scenario.conditions;
        let threshold = crate::solver::parallel_threshold();

        log::info!(
            "FTCS: {n} points, {iterations} steps, dt = {} s, s = {s:.5}",
            config.delta_t
        );

        let mut field = DMatrix::from_element(n, iterations + 1, bc.initial);
        let data = field.as_mut_slice();

        // ====== Step 3: Time Integration ======

        for j in 0..iterations {
            // column j is data[j*n .. (j+1)*n], column j+1 follows it
            let (head, tail) = data.split_at_mut((j + 1) * n);
            let prev = &mut head[j * n..];
            let next = &mut tail[..n];

            prev[0] = bc.left;
            prev[n - 1] = bc.right;

            step_interior(prev, next, s, threshold);

            next[0] = bc.left;
            next[n - 1] = bc.right;

            if let Some(obs) = observer.as_deref_mut() {
                obs.on_progress((j + 1) as f64 / iterations as f64);
                if j + 1 < iterations && obs.should_stop() {
                    log::info!("FTCS cancelled after {} of {iterations} steps", j + 1);
                    return Err(TimingError::Cancelled { step: j + 1 });
                }
            }
        }

        // ====== Step 4: Build Result ======

        Ok(ConcentrationField::from_matrix(field))
    }

    fn name(&self) -> &str {
        "FTCS"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{BoundaryConditions, SimulationGrid, StabilityRatio};
    use approx::assert_relative_eq;

    fn scenario(length: f64, dx: f64, bc: BoundaryConditions) -> Scenario {
        Scenario::new(SimulationGrid::build(length, dx).unwrap(), bc)
    }

    fn config(s: f64, iterations: usize) -> SolverConfiguration {
        SolverConfiguration::new(StabilityRatio::analyze(s, 1.0, 1.0).unwrap(), 1.0, iterations)
    }

    // ====== Solver Creation Tests ======

    #[test]
    fn test_ftcs_solver_creation() {
        assert_eq!(FtcsSolver::new().name(), "FTCS");
        assert_eq!(FtcsSolver::default().name(), "FTCS");
    }

    // ====== Field Shape and Boundaries ======

    #[test]
    fn test_field_shape() {
        let sc = scenario(40.0, 0.5, BoundaryConditions::default());
        let field = FtcsSolver::new().solve(&sc, &config(0.18, 250), None).unwrap();

        assert_eq!(field.points(), 79);
        assert_eq!(field.iterations(), 250);
    }

    #[test]
    fn test_boundaries_hold_in_every_column() {
        let bc = BoundaryConditions::new(0.96, 1.2, 0.96);
        let sc = scenario(20.0, 0.5, bc);
        let field = FtcsSolver::new().solve(&sc, &config(0.3, 50), None).unwrap();

        for j in 0..=50 {
            assert_eq!(field.value(0, j), 1.2, "left at column {j}");
            assert_eq!(field.value(field.points() - 1, j), 0.96, "right at column {j}");
        }
    }

    #[test]
    fn test_initial_column_interior() {
        let sc = scenario(10.0, 1.0, BoundaryConditions::new(0.5, 1.0, 0.0));
        let field = FtcsSolver::new().solve(&sc, &config(0.25, 3), None).unwrap();

        for i in 1..field.points() - 1 {
            assert_eq!(field.value(i, 0), 0.5);
        }
    }

    // ====== Numerical Behaviour ======

    #[test]
    fn test_first_step_by_hand() {
        // points 1..=5, interior starts at 0, left = 1, right = 0
        let sc = scenario(5.0, 1.0, BoundaryConditions::new(0.0, 1.0, 0.0));
        let field = FtcsSolver::new().solve(&sc, &config(0.25, 2), None).unwrap();

        // c[1,1] = 0.25 * (1 + 0 - 0) + 0
        assert_relative_eq!(field.value(1, 1), 0.25);
        assert_eq!(field.value(2, 1), 0.0);
        // c[1,2] = 0.25 * (1 + 0 - 0.5) + 0.25
        assert_relative_eq!(field.value(1, 2), 0.375);
        // c[2,2] = 0.25 * (0.25 + 0 - 0) + 0
        assert_relative_eq!(field.value(2, 2), 0.0625);
    }

    #[test]
    fn test_flat_conditions_stay_flat() {
        let sc = scenario(20.0, 0.5, BoundaryConditions::uniform(0.96));
        let field = FtcsSolver::new().solve(&sc, &config(0.5, 100), None).unwrap();

        assert!(field.matrix().iter().all(|&c| c == 0.96));
    }

    #[test]
    fn test_deterministic() {
        let sc = scenario(30.0, 0.5, BoundaryConditions::default());
        let a = FtcsSolver::new().solve(&sc, &config(0.4, 120), None).unwrap();
        let b = FtcsSolver::new().solve(&sc, &config(0.4, 120), None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let prev: Vec<f64> = (0..2000).map(|i| ((i as f64) * 0.01).sin()).collect();
        let mut sequential = vec![0.0; prev.len()];
        let mut parallel = vec![0.0; prev.len()];

        step_interior(&prev, &mut sequential, 0.45, usize::MAX);
        step_interior(&prev, &mut parallel, 0.45, 0);

        assert_eq!(sequential, parallel);
        assert_eq!(sequential[0], 0.0);
        assert_eq!(sequential[1999], 0.0);
    }

    // ====== Observer ======

    #[test]
    fn test_progress_reported_each_step() {
        let sc = scenario(10.0, 1.0, BoundaryConditions::default());
        let mut fractions = Vec::new();
        let mut observer = |f: f64| fractions.push(f);

        FtcsSolver::new()
            .solve(&sc, &config(0.2, 4), Some(&mut observer))
            .unwrap();

        assert_eq!(fractions, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_observer_does_not_change_result() {
        let sc = scenario(10.0, 0.5, BoundaryConditions::default());
        let plain = FtcsSolver::new().solve(&sc, &config(0.2, 40), None).unwrap();
        let mut observer = |_f: f64| {};
        let observed = FtcsSolver::new()
            .solve(&sc, &config(0.2, 40), Some(&mut observer))
            .unwrap();

        assert_eq!(plain, observed);
    }

    struct StopAfter {
        calls: usize,
        limit: usize,
    }

    impl SimulationObserver for StopAfter {
        fn on_progress(&mut self, _fraction: f64) {
            self.calls += 1;
        }

        fn should_stop(&self) -> bool {
            self.calls >= self.limit
        }
    }

    #[test]
    fn test_cancellation() {
        let sc = scenario(10.0, 1.0, BoundaryConditions::default());
        let mut observer = StopAfter { calls: 0, limit: 3 };

        let err = FtcsSolver::new()
            .solve(&sc, &config(0.2, 10), Some(&mut observer))
            .unwrap_err();

        assert!(matches!(err, TimingError::Cancelled { step: 3 }));
    }

    #[test]
    fn test_stop_request_on_last_step_is_ignored() {
        let sc = scenario(10.0, 1.0, BoundaryConditions::default());
        let mut observer = StopAfter { calls: 0, limit: 5 };

        let field = FtcsSolver::new().solve(&sc, &config(0.2, 5), Some(&mut observer));
        assert!(field.is_ok());
    }

    // ====== Validation ======

    #[test]
    fn test_zero_iterations_rejected() {
        let sc = scenario(10.0, 1.0, BoundaryConditions::default());
        assert!(FtcsSolver::new().solve(&sc, &config(0.2, 0), None).is_err());
    }

    #[test]
    fn test_non_finite_boundary_rejected() {
        let sc = scenario(10.0, 1.0, BoundaryConditions::new(f64::NAN, 1.0, 0.0));
        assert!(FtcsSolver::new().solve(&sc, &config(0.2, 5), None).is_err());
    }
}
