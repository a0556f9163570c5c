//! Measured data
//!
//! - [`MeasuredProfile`]: validated, immutable measured traverse
//! - [`ingest`]: loader for the two-column text files of the measurement workflow

pub mod ingest;
pub mod profile;

pub use ingest::{load_profile, read_profile};
pub use profile::{MeasuredProfile, ProfilePoint};
