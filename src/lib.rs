//! aptimer: diffusion chronometry from measured concentration profiles
//!
//! Estimates how long a diffusive exchange operated by simulating
//! one-dimensional diffusion with an explicit finite-difference scheme and
//! finding the time step whose profile best matches a measured traverse.
//!
//! # Architecture
//!
//! aptimer is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Diffusivity models provide the coefficient (what to simulate)
//!    - Solvers provide the time stepping (how to simulate)
//!
//! 2. **Explicit inputs, typed failures**
//!    - Every run gets its configuration as a value; nothing global
//!    - Every expected failure is a [`TimingError`](error::TimingError)
//!      variant, never a panic
//!
//! # Quick Start
//!
//! ```rust
//! use aptimer::prelude::*;
//!
//! # fn main() -> aptimer::error::Result<()> {
//! // 1. Measured profile: (distance µm, concentration)
//! let pairs: Vec<(f64, f64)> = (1..=40)
//!     .map(|x| (x as f64, if x < 5 { 1.1 } else { 0.96 }))
//!     .collect();
//!
//! // 2. Run configuration (900 °C, dx 0.5 µm, dt 8000 s, 250 steps)
//! let config = TimingConfiguration::default();
//!
//! // 3. Estimate
//! let estimator = Estimator::new(Box::new(ApatiteChlorine::new()));
//! let estimate = estimator.estimate_pairs(&config, &pairs, None)?;
//!
//! println!("{}", estimate.summary);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Arrhenius laws, crystal orientation, `DiffusivityModel`
//! - [`models`]: concrete diffusivity models
//! - [`solver`]: grid, stability gate, FTCS solver
//! - [`fit`]: best-fit search, bounds, summary
//! - [`data`]: measured profiles and their loader
//! - [`config`]: run configuration
//! - [`pipeline`]: one-call estimate

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

pub mod data;
pub mod fit;

pub mod config;
pub mod pipeline;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use aptimer::prelude::*;
    //! ```
    pub use crate::config::TimingConfiguration;
    pub use crate::data::{MeasuredProfile, ProfilePoint, load_profile};
    pub use crate::error::TimingError;
    pub use crate::fit::{BestFitResult, BestFitSearch, FitOutcome, FitRecords, TimingSummary};
    pub use crate::models::ApatiteChlorine;
    pub use crate::physics::DiffusivityModel;
    pub use crate::pipeline::{Estimator, TimingEstimate};
    pub use crate::solver::{
        BoundaryConditions, ConcentrationField, FtcsSolver, Scenario, SimulationGrid,
        SimulationObserver, Solver, SolverConfiguration, StabilityRatio,
    };
}
