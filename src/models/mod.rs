//! Diffusivity models for timing estimation
//!
//! All models implement the [`DiffusivityModel`](crate::physics::DiffusivityModel) trait.
//! The estimator calls `diffusivity` once per run: models are responsible for
//! the physics (temperature and orientation dependence), the solver for the
//! time integration.
//!
//! # Available Models
//!
//! ## [`ApatiteChlorine`]: Cl exchange in apatite
//!
//! Arrhenius laws along the a- and c-axes, combined with the `cos²` weights
//! of a traverse cut at 17.7° to the c-axis.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod apatite;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use apatite::{ApatiteChlorine, AxisDiffusivities};
