//! Best-fit search over simulated time steps
//!
//! Every step `j` in `0..iterations` is scored against the measured profile:
//!
//! 1. the model column `j` is interpolated at the measured distances;
//! 2. `match_count`: measured points with `m - u < model < m + u` (strict);
//! 3. `rms = Σ (m - model)² / x_i` where `x_i` is the number of model points.
//!
//! The best step is the first step with the smallest `rms`. It is only
//! accepted when it fits at least one measured point.

use crate::data::MeasuredProfile;
use crate::error::{Result, TimingError};
use crate::fit::bounds::{lower_bound_step, upper_bound_step};
use crate::fit::interpolation::LinearInterpolator;
use crate::fit::summary::TimingSummary;
use crate::solver::{ConcentrationField, SimulationGrid};

// =================================================================================================
// Records
// =================================================================================================

/// Score of one time step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRecord {
    /// Measured points matched within their uncertainty
    pub match_count: usize,
    /// Sum of squared residuals divided by the number of model points
    pub rms: f64,
}

/// Scores of every searched step, indexed by step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FitRecords {
    records: Vec<FitRecord>,
}

impl FitRecords {
    pub fn from_vec(records: Vec<FitRecord>) -> Self {
        Self { records }
    }

    /// Record of `step`, if it was searched
    pub fn get(&self, step: usize) -> Option<&FitRecord> {
        self.records.get(step)
    }

    /// Number of searched steps
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(step, record)` pairs in step order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &FitRecord)> + '_ {
        self.records.iter().enumerate()
    }

    pub fn match_counts(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.match_count).collect()
    }

    pub fn rms_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.rms).collect()
    }

    /// Steps that fit no measured point at all
    pub fn no_fit_steps(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, r)| r.match_count == 0)
            .map(|(j, _)| j)
            .collect()
    }
}

// =================================================================================================
// Result types
// =================================================================================================

/// Selected step and its uncertainty bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestFitResult {
    pub best_step: usize,
    /// First step of the plateau of equal match counts around `best_step`
    pub lower_bound_step: usize,
    /// Last step of that plateau, or the iteration count when it never ends
    pub upper_bound_step: usize,
    /// Mean `|model - measured| / measured` one step before `best_step`
    /// (the final column when `best_step` is 0)
    pub discrepancy: f64,
}

/// Successful search
#[derive(Debug, Clone)]
pub struct FitOutcome {
    pub best: BestFitResult,
    pub records: FitRecords,
    /// Steps with a zero match count, best step excluded by construction
    pub no_fit_steps: Vec<usize>,
    delta_t: f64,
    iterations: usize,
}

impl FitOutcome {
    /// Time step the search converted steps with (s)
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Physical-time report
    pub fn summary(&self) -> TimingSummary {
        TimingSummary::new(&self.best, self.delta_t, self.iterations)
    }
}

// =================================================================================================
// Search
// =================================================================================================

/// Scores every step of a field against a measured profile
///
/// # Example
///
/// ```rust
/// use aptimer::data::MeasuredProfile;
/// use aptimer::fit::BestFitSearch;
/// use aptimer::solver::{
///     BoundaryConditions, FtcsSolver, Scenario, SimulationGrid, Solver,
///     SolverConfiguration, StabilityRatio,
/// };
///
/// let grid = SimulationGrid::build(5.0, 1.0).unwrap();
/// let scenario = Scenario::new(grid.clone(), BoundaryConditions::uniform(1.0));
/// let stability = StabilityRatio::analyze(0.2, 1.0, 1.0).unwrap();
/// let config = SolverConfiguration::new(stability, 1.0, 10);
/// let field = FtcsSolver::new().solve(&scenario, &config, None).unwrap();
///
/// let profile = MeasuredProfile::from_pairs(&[(1.0, 1.0), (3.0, 1.0), (5.0, 1.0)], 0.1).unwrap();
/// let outcome = BestFitSearch::new().search(&field, &grid, &profile, 1.0).unwrap();
/// assert_eq!(outcome.best.best_step, 0);
/// assert_eq!(outcome.best.upper_bound_step, 10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFitSearch;

impl BestFitSearch {
    pub fn new() -> Self {
        Self
    }

    /// Run the search
    ///
    /// # Errors
    ///
    /// - [`TimingError::Configuration`] when `field` and `grid` disagree, the
    ///   field has no step, or `delta_t` is not positive
    /// - [`TimingError::NoFit`] when the best step matches no measured point
    pub fn search(
        &self,
        field: &ConcentrationField,
        grid: &SimulationGrid,
        profile: &MeasuredProfile,
        delta_t: f64,
    ) -> Result<FitOutcome> {
        if field.points() != grid.len() {
            return Err(TimingError::configuration(
                "field",
                format!(
                    "field has {} points but the grid has {}",
                    field.points(),
                    grid.len()
                ),
            ));
        }
        let iterations = field.iterations();
        if iterations == 0 {
            return Err(TimingError::configuration(
                "iterations",
                "field contains no simulated step",
            ));
        }
        if !delta_t.is_finite() || delta_t <= 0.0 {
            return Err(TimingError::configuration(
                "delta_t",
                format!("must be a positive finite number, got {delta_t}"),
            ));
        }

        let interp = LinearInterpolator::new(grid.positions(), profile.distances());
        if interp.clamped() > 0 {
            log::warn!(
                "{} measured point(s) outside the model grid [{}, {}]; using end values",
                interp.clamped(),
                grid.positions()[0],
                grid.last_position()
            );
        }

        let measured = profile.concentrations();
        let uncertainty = profile.uncertainties();
        let x_i = grid.len() as f64;

        // ====== Score every step ======

        let mut model = vec![0.0; profile.len()];
        let mut records = Vec::with_capacity(iterations);
        let mut best_step = 0;
        let mut min_rms = f64::INFINITY;

        for j in 0..iterations {
            interp.evaluate_into(field.column(j), &mut model);

            let mut match_count = 0;
            let mut sse = 0.0;
            for k in 0..model.len() {
                let (m, u, v) = (measured[k], uncertainty[k], model[k]);
                if v > m - u && v < m + u {
                    match_count += 1;
                }
                sse += (m - v) * (m - v);
            }
            let rms = sse / x_i;

            if j == 0 || rms < min_rms {
                min_rms = rms;
                best_step = j;
            }

            records.push(FitRecord { match_count, rms });
        }

        let records = FitRecords::from_vec(records);

        // ====== No-fit check ======

        let counts = records.match_counts();
        if counts[best_step] == 0 {
            log::warn!("Best step {best_step} (rms = {min_rms:e}) fits no measured point");
            return Err(TimingError::NoFit {
                step: best_step,
                records,
                field: None,
            });
        }

        let no_fit_steps = records.no_fit_steps();
        if !no_fit_steps.is_empty() {
            log::warn!(
                "{} of {iterations} steps fit no measured point",
                no_fit_steps.len()
            );
        }

        // ====== Bounds and discrepancy ======

        let lower = lower_bound_step(&counts, best_step);
        let upper = upper_bound_step(&counts, best_step);

        // step 0 has no predecessor; wrap to the last column
        let previous = if best_step == 0 { iterations } else { best_step - 1 };
        interp.evaluate_into(field.column(previous), &mut model);
        let discrepancy = model
            .iter()
            .zip(measured)
            .map(|(v, m)| (v - m).abs() / m)
            .sum::<f64>()
            / model.len() as f64;

        log::info!(
            "Best fit at step {best_step} of {iterations} ({} matches), bounds [{lower}, {upper}]",
            counts[best_step]
        );

        Ok(FitOutcome {
            best: BestFitResult {
                best_step,
                lower_bound_step: lower,
                upper_bound_step: upper,
                discrepancy,
            },
            records,
            no_fit_steps,
            delta_t,
            iterations,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
