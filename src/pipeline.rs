//! One-call timing estimate
//!
//! Runs every stage in order and stops at the first failure:
//!
//! ```text
//! diffusivity → grid → stability gate → FTCS → best-fit search → summary
//! ```
//!
//! The estimator keeps no state between runs; the same instance can serve
//! any number of configurations and profiles.
//!
//! # Example
//!
//! ```rust
//! use aptimer::config::TimingConfiguration;
//! use aptimer::models::ApatiteChlorine;
//! use aptimer::pipeline::Estimator;
//!
//! let estimator = Estimator::new(Box::new(ApatiteChlorine::new()));
//! let config = TimingConfiguration::default().iterations(50);
//! let pairs: Vec<(f64, f64)> = (1..=40).map(|x| (x as f64, 0.96)).collect();
//!
//! let estimate = estimator.estimate_pairs(&config, &pairs, None);
//! assert!(estimate.is_ok());
//! ```

use nalgebra::DVector;

use crate::config::TimingConfiguration;
use crate::data::MeasuredProfile;
use crate::error::{Result, TimingError};
use crate::fit::{BestFitSearch, FitOutcome, TimingSummary};
use crate::physics::DiffusivityModel;
use crate::solver::{
    ConcentrationField, FtcsSolver, Scenario, SimulationGrid, SimulationObserver, Solver,
    SolverConfiguration, StabilityRatio,
};

/// Everything one successful run produced
#[derive(Debug, Clone)]
pub struct TimingEstimate {
    /// Effective diffusivity along the traverse (µm²/s)
    pub diffusivity: f64,
    pub grid: SimulationGrid,
    pub stability: StabilityRatio,
    pub field: ConcentrationField,
    pub fit: FitOutcome,
    pub summary: TimingSummary,
}

impl TimingEstimate {
    /// Model x array (µm)
    pub fn model_positions(&self) -> &[f64] {
        self.grid.positions()
    }

    /// Model y array at the best step
    pub fn best_profile(&self) -> DVector<f64> {
        self.field.profile(self.fit.best.best_step)
    }

    /// Model y arrays at the lower and upper bound steps
    pub fn bound_profiles(&self) -> (DVector<f64>, DVector<f64>) {
        (
            self.field.profile(self.fit.best.lower_bound_step),
            self.field.profile(self.fit.best.upper_bound_step),
        )
    }
}

/// Runs the full estimate for one diffusivity model
pub struct Estimator {
    model: Box<dyn DiffusivityModel>,
    solver: FtcsSolver,
    search: BestFitSearch,
}

impl Estimator {
    pub fn new(model: Box<dyn DiffusivityModel>) -> Self {
        Self {
            model,
            solver: FtcsSolver::new(),
            search: BestFitSearch::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Estimate against an already validated profile
    ///
    /// The profile's own uncertainties are used; `config.uncertainty` only
    /// applies to [`estimate_pairs`](Self::estimate_pairs).
    ///
    /// # Errors
    ///
    /// - [`TimingError::Configuration`]: invalid configuration or grid
    /// - [`TimingError::Instability`]: no simulation was run
    /// - [`TimingError::Cancelled`]: the observer stopped the run
    /// - [`TimingError::NoFit`]: carries the records and the simulated field
    pub fn estimate(
        &self,
        config: &TimingConfiguration,
        profile: &MeasuredProfile,
        observer: Option<&mut dyn SimulationObserver>,
    ) -> Result<TimingEstimate> {
        config.validate()?;

        let diffusivity = self.model.diffusivity(config.temperature_c);
        log::info!(
            "{}: D = {diffusivity:e} um2/s at {} °C",
            self.model.name(),
            config.temperature_c
        );

        let grid = SimulationGrid::build(profile.length(), config.delta_x)?;
        let stability = StabilityRatio::analyze(diffusivity, config.delta_t, config.delta_x)?;

        let scenario = Scenario::new(grid, config.boundaries);
        let solver_config = SolverConfiguration::new(stability, config.delta_t, config.iterations);
        let field = self.solver.solve(&scenario, &solver_config, observer)?;
        let grid = scenario.grid;

        let fit = match self.search.search(&field, &grid, profile, config.delta_t) {
            Ok(fit) => fit,
            Err(TimingError::NoFit { step, records, .. }) => {
                return Err(TimingError::NoFit {
                    step,
                    records,
                    field: Some(Box::new(field)),
                });
            }
            Err(e) => return Err(e),
        };
        let summary = fit.summary();

        log::info!(
            "Best fit {:.1} h ({:.2}% discrepancy)",
            summary.best_hours,
            summary.discrepancy_percent
        );

        Ok(TimingEstimate {
            diffusivity,
            grid,
            stability,
            field,
            fit,
            summary,
        })
    }

    /// Estimate from raw `(distance, concentration)` pairs with
    /// `config.uncertainty` on every point
    pub fn estimate_pairs(
        &self,
        config: &TimingConfiguration,
        pairs: &[(f64, f64)],
        observer: Option<&mut dyn SimulationObserver>,
    ) -> Result<TimingEstimate> {
        let profile = MeasuredProfile::from_pairs(pairs, config.uncertainty)?;
        self.estimate(config, &profile, observer)
    }
}

impl std::fmt::Debug for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Estimator")
            .field("model", &self.model.name())
            .field("solver", &self.solver.name())
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApatiteChlorine;
    use crate::solver::BoundaryConditions;

    /// Constant diffusivity, handy for hand-checked runs
    struct Constant(f64);

    impl DiffusivityModel for Constant {
        fn diffusivity(&self, _temperature_c: f64) -> f64 {
            self.0
        }

        fn name(&self) -> &str {
            "constant"
        }
    }

    fn flat_pairs(n: usize, value: f64) -> Vec<(f64, f64)> {
        (1..=n).map(|x| (x as f64, value)).collect()
    }

    #[test]
    fn test_flat_run() {
        let estimator = Estimator::new(Box::new(ApatiteChlorine::new()));
        let config = TimingConfiguration::default()
            .iterations(20)
            .boundaries(BoundaryConditions::uniform(0.96));

        let estimate = estimator.estimate_pairs(&config, &flat_pairs(40, 0.96), None).unwrap();

        assert_eq!(estimate.grid.len(), 79);
        assert_eq!(estimate.field.iterations(), 20);
        assert_eq!(estimate.fit.best.best_step, 0);
        assert_eq!(estimate.fit.best.upper_bound_step, 20);
        assert_eq!(estimate.model_positions().len(), 79);
        assert_eq!(estimate.best_profile().len(), 79);

        // upper bound is the final column, still addressable
        let (lower, upper) = estimate.bound_profiles();
        assert_eq!(estimate.fit.best.lower_bound_step, 0);
        assert_eq!(lower.len(), 79);
        assert_eq!(upper, estimate.field.final_profile());
        assert!(lower.iter().chain(upper.iter()).all(|&c| c == 0.96));
    }

    #[test]
    fn test_instability_stops_before_solving() {
        let estimator = Estimator::new(Box::new(ApatiteChlorine::new()));
        let config = TimingConfiguration::default().delta_t(80000.0);
        let mut calls = 0;
        let mut observer = |_f: f64| calls += 1;

        let err = estimator
            .estimate_pairs(&config, &flat_pairs(40, 0.96), Some(&mut observer))
            .unwrap_err();

        assert!(matches!(err, TimingError::Instability { .. }));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_no_fit_carries_field() {
        let estimator = Estimator::new(Box::new(Constant(0.1)));
        let config = TimingConfiguration::default()
            .delta_x(1.0)
            .delta_t(1.0)
            .iterations(10)
            .uncertainty(0.0)
            .boundaries(BoundaryConditions::uniform(0.5));

        match estimator.estimate_pairs(&config, &[(1.0, 1.0), (5.0, 1.0)], None) {
            Err(TimingError::NoFit { field: Some(field), records, .. }) => {
                assert_eq!(field.iterations(), 10);
                assert_eq!(records.len(), 10);
            }
            other => panic!("expected NoFit with field, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let estimator = Estimator::new(Box::new(Constant(0.1)));
        let config = TimingConfiguration::default().iterations(0);
        assert!(matches!(
            estimator.estimate_pairs(&config, &flat_pairs(10, 1.0), None),
            Err(TimingError::Configuration { parameter: "iterations", .. })
        ));
    }

    #[test]
    fn test_debug_names_model() {
        let estimator = Estimator::new(Box::new(Constant(1.0)));
        assert_eq!(estimator.model_name(), "constant");
        assert!(format!("{estimator:?}").contains("FTCS"));
    }
}
