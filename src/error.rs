//! Error types for timing estimation
//!
//! Every failure the engine can report is an expected, local condition: a bad
//! parameter, an unstable discretization, a profile the model never reaches.
//! None of them indicate corrupted internal state, so they are returned as
//! values and never raised as panics.
//!
//! | Variant | Raised by | Simulation ran? |
//! |---------|-----------|-----------------|
//! | [`TimingError::Configuration`] | grid, profile, configuration validation | no |
//! | [`TimingError::Instability`] | stability gate | no |
//! | [`TimingError::NoFit`] | best-fit search | yes |
//! | [`TimingError::Cancelled`] | simulation observer | partially |
//! | [`TimingError::Io`] / [`TimingError::Parse`] | profile ingest | no |

use thiserror::Error;

use crate::fit::FitRecords;
use crate::solver::ConcentrationField;

/// Timing estimation error type
#[derive(Error, Debug)]
pub enum TimingError {
    /// Invalid grid, run or profile parameter
    #[error("Configuration error: {parameter}: {reason}")]
    Configuration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Human-readable explanation
        reason: String,
    },

    /// Explicit scheme stability ratio above 0.5
    #[error(
        "Numerical instability: stability ratio {ratio:.4} exceeds 0.5 \
         (delta_t = {delta_t} s, delta_x = {delta_x} um). \
         Reduce delta_t or increase delta_x."
    )]
    Instability {
        /// Computed `D * delta_t / delta_x^2`
        ratio: f64,
        /// Time step used (s)
        delta_t: f64,
        /// Distance step used (um)
        delta_x: f64,
    },

    /// The best-scoring time step has no measured point within uncertainty
    ///
    /// The simulation itself completed; the per-step records (and, when the
    /// error comes from the pipeline, the concentration field) are carried
    /// along so the caller keeps the diagnostics.
    #[error(
        "No fit: best time step {step} has no measured point within uncertainty. \
         Increase the iteration count or change initial/boundary conditions."
    )]
    NoFit {
        /// Step that would have been selected as best
        step: usize,
        /// Per-step fit records of the whole run
        records: FitRecords,
        /// Simulated field, attached by the pipeline
        field: Option<Box<ConcentrationField>>,
    },

    /// Simulation stopped by its observer
    #[error("Simulation cancelled after {step} completed steps")]
    Cancelled {
        /// Number of steps completed before the stop
        step: usize,
    },

    /// I/O error while reading a measured profile
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed row in a measured profile
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the source
        line: usize,
        /// What went wrong
        message: String,
    },
}

impl TimingError {
    /// Build a [`TimingError::Configuration`]
    pub fn configuration(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            parameter,
            reason: reason.into(),
        }
    }

    /// True for errors the caller can fix by adjusting the discretization
    pub fn is_recoverable_by_retry(&self) -> bool {
        matches!(self, Self::Instability { .. } | Self::NoFit { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TimingError>;

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message() {
        let err = TimingError::configuration("delta_x", "must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "Configuration error: delta_x: must be positive, got 0"
        );
        assert!(!err.is_recoverable_by_retry());
    }

    #[test]
    fn test_instability_message_mentions_ratio() {
        let err = TimingError::Instability {
            ratio: 1.82,
            delta_t: 80000.0,
            delta_x: 0.5,
        };
        let message = err.to_string();
        assert!(message.contains("1.8200"));
        assert!(message.contains("Reduce delta_t"));
        assert!(err.is_recoverable_by_retry());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TimingError = io.into();
        assert!(matches!(err, TimingError::Io(_)));
    }
}
