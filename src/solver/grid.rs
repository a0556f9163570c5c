//! Spatial grid of model points
//!
//! Model points start at 1 µm and advance by `delta_x` until they would pass
//! the physical length of the measured traverse:
//!
//! ```text
//! x = 1, 1 + dx, 1 + 2dx, ...   while x <= length
//! ```
//!
//! Positions are produced by repeated addition, so for a `delta_x` that is not
//! a power of two the last position can fall slightly short of `length`. The
//! fit interpolation clamps any measured distance outside the grid to the
//! nearest end value.

use nalgebra::DVector;

use crate::error::{Result, TimingError};

/// Smallest usable grid: two boundary cells and one interior cell
pub const MIN_GRID_POINTS: usize = 3;

/// Largest grid accepted by [`SimulationGrid::build`]
pub const MAX_GRID_POINTS: usize = 1 << 24;

/// First model position \[µm\]
pub const GRID_ORIGIN: f64 = 1.0;

/// Model point positions along the traverse
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationGrid {
    positions: Vec<f64>,
    delta_x: f64,
    length: f64,
}

impl SimulationGrid {
    /// Build the grid for a traverse of `length` µm with spacing `delta_x`
    ///
    /// # Errors
    ///
    /// [`TimingError::Configuration`] when `delta_x` is not a positive finite
    /// number, when `length` is below [`GRID_ORIGIN`] or not finite, or when
    /// fewer than [`MIN_GRID_POINTS`] or more than [`MAX_GRID_POINTS`] points
    /// fit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aptimer::solver::SimulationGrid;
    ///
    /// let grid = SimulationGrid::build(40.0, 0.5).unwrap();
    /// assert_eq!(grid.len(), 79);
    /// assert_eq!(grid.positions()[0], 1.0);
    /// assert_eq!(grid.last_position(), 40.0);
    /// ```
    pub fn build(length: f64, delta_x: f64) -> Result<Self> {
        if !delta_x.is_finite() || delta_x <= 0.0 {
            return Err(TimingError::configuration(
                "delta_x",
                format!("must be a positive finite number, got {delta_x}"),
            ));
        }
        if GRID_ORIGIN + delta_x == GRID_ORIGIN {
            return Err(TimingError::configuration(
                "delta_x",
                format!("{delta_x} is below the floating-point resolution at the grid origin"),
            ));
        }
        if !length.is_finite() || length < GRID_ORIGIN {
            return Err(TimingError::configuration(
                "length",
                format!("traverse length must be finite and >= {GRID_ORIGIN}, got {length}"),
            ));
        }

        let intervals = (length - GRID_ORIGIN) / delta_x;
        if !(intervals < MAX_GRID_POINTS as f64) {
            return Err(TimingError::configuration(
                "length",
                format!(
                    "traverse of {length} with spacing {delta_x} exceeds {MAX_GRID_POINTS} points"
                ),
            ));
        }

        let mut positions = Vec::with_capacity(intervals as usize + 2);
        let mut x = GRID_ORIGIN;
        while x <= length && positions.len() <= MAX_GRID_POINTS {
            positions.push(x);
            x += delta_x;
        }
        if positions.len() > MAX_GRID_POINTS {
            return Err(TimingError::configuration(
                "length",
                format!("grid exceeds {MAX_GRID_POINTS} points"),
            ));
        }

        if positions.len() < MIN_GRID_POINTS {
            return Err(TimingError::configuration(
                "delta_x",
                format!(
                    "grid of length {length} with spacing {delta_x} has {} points, at least {MIN_GRID_POINTS} required",
                    positions.len()
                ),
            ));
        }

        log::debug!(
            "Grid built: {} points, dx = {delta_x}, last = {}",
            positions.len(),
            positions[positions.len() - 1]
        );

        Ok(Self {
            positions,
            delta_x,
            length,
        })
    }

    /// Number of model points (`x_i`)
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a built grid
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Model positions \[µm\]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Positions as a column vector, aligned with field columns
    pub fn to_dvector(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.positions)
    }

    /// Spacing \[µm\]
    pub fn delta_x(&self) -> f64 {
        self.delta_x
    }

    /// Requested traverse length \[µm\]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Last model position; may be slightly below [`length`](Self::length)
    pub fn last_position(&self) -> f64 {
        self.positions[self.positions.len() - 1]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
