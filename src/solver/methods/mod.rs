//! Numerical methods for the diffusion equation
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Architecture
//!
//! The separation between the abstract solver interface (`solver::traits`) and
//! concrete implementations (`solver::methods`) keeps the `Solver` trait stable
//! while methods are added next to each other.
//!
//! # Available Methods
//!
//! - **[`FtcsSolver`]**: forward-time centred-space explicit scheme
//!   - Order: first order in time, second order in space
//!   - Cost: one stencil evaluation per interior point per step
//!   - Stability: `D·Δt/Δx² <= 0.5`, gated by
//!     [`StabilityRatio`](crate::solver::StabilityRatio) before the run
//!
//! # Design Philosophy
//!
//! Each solver is:
//! - **Self-contained**: no shared mutable state
//! - **Stateless**: can be reused for multiple simulations
//!
//! # Performance Considerations
//!
//! - **Rayon parallelization** (feature `parallel`) for large spatial grids
//! - **Configurable threshold** via `set_parallel_threshold()`
//! - The field is a column-major `nalgebra::DMatrix`, so one time step reads
//!   and writes two contiguous slices

pub mod ftcs;

// Re-exports for convenience
pub use ftcs::FtcsSolver;
