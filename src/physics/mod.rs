//! Diffusivity physics
//!
//! This module provides the building blocks used to derive an effective
//! diffusion coefficient along a measured traverse:
//!
//! - **Arrhenius law** ([`ArrheniusLaw`]): temperature dependence of a single
//!   crystallographic pathway, `D = D0 * exp(-Ea / (R * T))`
//! - **Crystal orientation** ([`CrystalOrientation`]): angles between the
//!   traverse and the crystallographic axes, and the resulting `cos²` weights
//! - **Diffusivity model** ([`DiffusivityModel`]): trait combining both into
//!   the single traverse diffusivity consumed by the solver
//!
//! # Architecture
//!
//! Physics is **separate from numerics**, exactly like the solver layer:
//! - the model provides the coefficient (physics)
//! - the solver provides the time stepping (numerics)
//!
//! # Example
//!
//! ```rust
//! use aptimer::physics::{ArrheniusLaw, CrystalOrientation};
//!
//! let a_axis = ArrheniusLaw::new(1.3e-9, 216_000.0);
//! let orientation = CrystalOrientation::apatite_traverse();
//!
//! let d_a = a_axis.diffusivity_um2(900.0);
//! let weighted = orientation.a_axis_weight() * d_a;
//! assert!(weighted > 0.0 && weighted < d_a);
//! ```

// module declaration
pub mod arrhenius;
pub mod orientation;
pub mod traits;

// re-export commonly used types for convenience
pub use arrhenius::ArrheniusLaw;
pub use orientation::CrystalOrientation;
pub use traits::DiffusivityModel;

/// Ideal gas constant R \[J/(mol·K)\]
pub const GAS_CONSTANT: f64 = 8.314;

/// Offset between Celsius and Kelvin scales
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Conversion factor from m²/s to µm²/s
pub const M2_TO_UM2: f64 = 1e12;
