//! Numerical solvers
//!
//! This module turns a diffusivity and a discretization into a simulated
//! concentration field.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Spatial grid (`SimulationGrid`)
//!    - Initial and boundary concentrations (`BoundaryConditions`)
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Accepted stability ratio (`StabilityRatio`)
//!    - Time step and number of steps
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the numerical scheme
//!    - Returns the `ConcentrationField`
//!
//! # Module Organization
//!
//! - **`grid`**: model point positions from traverse length and `delta_x`
//! - **`boundary`**: initial interior value plus fixed end values
//! - **`stability`**: the `s <= 0.5` gate of the explicit scheme
//! - **`scenario`**: grid + boundaries
//! - **`traits`**: `Solver`, `SolverConfiguration`, `ConcentrationField`,
//!   `SimulationObserver`
//! - **`methods`**: `FtcsSolver`
//!
//! # Quick Start Example
//!
//! ```rust
//! use aptimer::solver::{
//!     BoundaryConditions, FtcsSolver, Scenario, SimulationGrid, Solver,
//!     SolverConfiguration, StabilityRatio,
//! };
//!
//! # fn main() -> aptimer::error::Result<()> {
//! // 1. WHAT to solve
//! let grid = SimulationGrid::build(40.0, 0.5)?;
//! let scenario = Scenario::new(grid, BoundaryConditions::default());
//!
//! // 2. HOW to solve: the stability gate runs first
//! let stability = StabilityRatio::analyze(5.687e-6, 8000.0, 0.5)?;
//! let config = SolverConfiguration::new(stability, 8000.0, 250);
//!
//! // 3. Solve
//! let field = FtcsSolver::new().solve(&scenario, &config, None)?;
//! assert_eq!(field.iterations(), 250);
//! # Ok(())
//! # }
//! ```
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐
//! │ SimulationGrid  │   │ Boundary        │
//! │                 │   │ Conditions      │
//! └────────┬────────┘   └────────┬────────┘
//!          └──────────┬──────────┘
//!            ┌────────▼────────┐
//!            │ Scenario        │ ← WHAT to solve
//!            └────────┬────────┘
//!                     │      ┌─────────────────────┐
//!                     │      │ StabilityRatio      │ ← gate (s <= 0.5)
//!                     │      └──────────┬──────────┘
//!                     │      ┌──────────▼──────────┐
//!                     │      │ SolverConfiguration │ ← HOW to solve
//!                     │      └──────────┬──────────┘
//!                     └─────────┬───────┘
//!                      ┌────────▼────────┐
//!                      │ FtcsSolver      │ ← The method
//!                      └────────┬────────┘
//!                      ┌────────▼───────────┐
//!                      │ ConcentrationField │ ← points x (steps + 1)
//!                      └────────────────────┘
//! ```
//!
//! # Error Handling
//!
//! All solver entry points return [`crate::error::Result`]. An unstable
//! discretization never reaches a solver: [`StabilityRatio::analyze`] returns
//! [`TimingError::Instability`](crate::error::TimingError::Instability) first.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod boundary;
mod grid;
mod methods;
mod scenario;
mod stability;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand work off to Rayon is a numerical-execution concern,
// so it lives here rather than in the individual methods.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on every
// step. Relaxed ordering is sufficient: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of grid points above which a time step switches to
/// parallel iteration.
///
/// One FTCS cell costs a handful of flops, so Rayon's dispatch overhead only
/// pays off on fine grids.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Solvers iterate sequentially over grids with at most this many points and
/// switch to Rayon above it, but only when the crate is compiled with the
/// `parallel` feature. The value is read once per solve.
///
/// # Example
///
/// ```rust
/// use aptimer::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use aptimer::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Direct store: the setter rejects 0.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{ConcentrationField, SimulationObserver, Solver, SolverConfiguration};

pub use boundary::BoundaryConditions;
pub use grid::{MAX_GRID_POINTS, MIN_GRID_POINTS, SimulationGrid};
pub use scenario::Scenario;
pub use stability::{STABILITY_LIMIT, StabilityRatio, max_stable_delta_t};

pub use methods::FtcsSolver;

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Tests that write the global threshold run one at a time
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 4096);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _serial = serial();
        let _guard = ThresholdGuard::save(500);
        assert_eq!(parallel_threshold(), 500);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let _serial = serial();
        let before = parallel_threshold();
        {
            let _guard = ThresholdGuard::save(42);
            assert_eq!(parallel_threshold(), 42);
        }
        // Guard dropped: value must be back to what it was before.
        assert_eq!(parallel_threshold(), before);
    }

    #[test]
    fn test_threshold_is_visible_across_threads() {
        use std::thread;

        let _serial = serial();
        let _guard = ThresholdGuard::save(1234);

        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(parallel_threshold))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1234);
        }
    }

    #[test]
    fn test_solve_with_low_threshold_matches_default() {
        let grid = SimulationGrid::build(20.0, 0.25).unwrap();
        let scenario = Scenario::new(grid, BoundaryConditions::default());
        let stability = StabilityRatio::analyze(0.4, 1.0, 1.0).unwrap();
        let config = SolverConfiguration::new(stability, 1.0, 30);

        let _serial = serial();
        let reference = FtcsSolver::new().solve(&scenario, &config, None).unwrap();
        let low = {
            let _guard = ThresholdGuard::save(8);
            FtcsSolver::new().solve(&scenario, &config, None).unwrap()
        };

        assert_eq!(reference, low);
    }
}
