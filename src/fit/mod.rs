//! Best-fit search
//!
//! Compares every simulated time step with the measured profile, picks the
//! step with the smallest misfit and derives asymmetric bounds from the run of
//! neighbouring steps that fit equally many measured points.
//!
//! - **`interpolation`**: model column → measured distances
//! - **`search`**: per-step scoring, best step, no-fit detection
//! - **`bounds`**: lower/upper plateau scans
//! - **`summary`**: steps → hours and days, annotation text

pub mod bounds;
pub mod interpolation;
pub mod search;
pub mod summary;

pub use interpolation::LinearInterpolator;
pub use search::{BestFitResult, BestFitSearch, FitOutcome, FitRecord, FitRecords};
pub use summary::TimingSummary;
