//! Physical-time report of a best fit
//!
//! Converts step indices into seconds, hours and days and renders the
//! three-line annotation used to label a best-fit figure:
//!
//! ```text
//! Time = 33 (+18/-8.9) hours
//! 1.4 (+0.8/-0.4) days
//! Discrepancy = 0.42%
//! ```

use std::fmt;

use crate::fit::BestFitResult;

const SECONDS_PER_HOUR: f64 = 3600.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Best-fit time and its asymmetric bounds in physical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
    /// `delta_t * best_step` (s)
    pub best_seconds: f64,
    pub best_hours: f64,
    pub best_days: f64,
    /// Distance to the upper bound, >= 0 (h)
    pub plus_hours: f64,
    /// Distance to the lower bound, <= 0 (h)
    pub minus_hours: f64,
    pub plus_days: f64,
    pub minus_days: f64,
    /// Mean relative misfit, in percent
    pub discrepancy_percent: f64,
    /// `delta_t * iterations` (s)
    pub total_simulated_seconds: f64,
}

impl TimingSummary {
    pub fn new(best: &BestFitResult, delta_t: f64, iterations: usize) -> Self {
        let step_hours = |steps: f64| delta_t * steps / SECONDS_PER_HOUR;

        let best_step = best.best_step as f64;
        let best_hours = step_hours(best_step);
        let plus_hours = step_hours(best.upper_bound_step as f64 - best_step);
        let minus_hours = step_hours(best.lower_bound_step as f64 - best_step);

        Self {
            best_seconds: delta_t * best_step,
            best_hours,
            best_days: best_hours / HOURS_PER_DAY,
            plus_hours,
            minus_hours,
            plus_days: plus_hours / HOURS_PER_DAY,
            minus_days: minus_hours / HOURS_PER_DAY,
            discrepancy_percent: 100.0 * best.discrepancy,
            total_simulated_seconds: delta_t * iterations as f64,
        }
    }

    /// Simulated time in hours
    pub fn total_simulated_hours(&self) -> f64 {
        self.total_simulated_seconds / SECONDS_PER_HOUR
    }

    /// `Total time = 2000000s (556 hours)`
    pub fn total_time_line(&self) -> String {
        format!(
            "Total time = {}s ({:.0} hours)",
            self.total_simulated_seconds,
            self.total_simulated_hours()
        )
    }
}

impl fmt::Display for TimingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Time = {:.0} (+{:.0}/{:.1}) hours",
            self.best_hours, self.plus_hours, self.minus_hours
        )?;
        writeln!(
            f,
            "{:.1} (+{:.1}/{:.1}) days",
            self.best_days, self.plus_days, self.minus_days
        )?;
        write!(f, "Discrepancy = {:.2}%", self.discrepancy_percent)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
