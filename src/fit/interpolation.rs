//! Piecewise-linear interpolation of model profiles at measured distances
//!
//! The measured distances never change during a search, so the bracketing
//! grid interval and the linear weight of every distance are computed once
//! and reused for each of the simulated columns.
//!
//! Distances outside the grid take the value of the nearest end point.

/// Precomputed bracket for one target position
#[derive(Debug, Clone, Copy, PartialEq)]
struct Stencil {
    lower: usize,
    upper: usize,
    weight: f64,
}

/// Linear interpolation from a fixed grid onto fixed target positions
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    stencils: Vec<Stencil>,
    clamped: usize,
}

impl LinearInterpolator {
    /// Precompute the stencils of `targets` on `grid`
    ///
    /// `grid` must be strictly increasing and non-empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aptimer::fit::LinearInterpolator;
    ///
    /// let interp = LinearInterpolator::new(&[1.0, 2.0, 3.0], &[1.5, 3.0, 7.0]);
    /// assert_eq!(interp.evaluate(&[0.0, 1.0, 4.0]), vec![0.5, 4.0, 4.0]);
    /// assert_eq!(interp.clamped(), 1);
    /// ```
    pub fn new(grid: &[f64], targets: &[f64]) -> Self {
        let n = grid.len();
        let last = n.saturating_sub(1);
        let mut clamped = 0;

        let stencils = targets
            .iter()
            .map(|&x| {
                let k = grid.partition_point(|&p| p <= x);
                if k == 0 {
                    clamped += 1;
                    Stencil { lower: 0, upper: 0, weight: 0.0 }
                } else if k == n {
                    if x > grid[last] {
                        clamped += 1;
                    }
                    Stencil { lower: last, upper: last, weight: 0.0 }
                } else {
                    let (x0, x1) = (grid[k - 1], grid[k]);
                    Stencil {
                        lower: k - 1,
                        upper: k,
                        weight: (x - x0) / (x1 - x0),
                    }
                }
            })
            .collect();

        Self { stencils, clamped }
    }

    /// Number of target positions
    pub fn len(&self) -> usize {
        self.stencils.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stencils.is_empty()
    }

    /// How many targets lie outside the grid and take an end value
    pub fn clamped(&self) -> usize {
        self.clamped
    }

    /// Interpolate one column into `out`
    ///
    /// `column` is aligned with the grid passed to [`new`](Self::new); `out`
    /// has one slot per target.
    pub fn evaluate_into(&self, column: &[f64], out: &mut [f64]) {
        for (slot, st) in out.iter_mut().zip(&self.stencils) {
            let c0 = column[st.lower];
            *slot = if st.lower == st.upper {
                c0
            } else {
                c0 + st.weight * (column[st.upper] - c0)
            };
        }
    }

    /// Interpolate one column
    pub fn evaluate(&self, column: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.stencils.len()];
        self.evaluate_into(column, &mut out);
        out
    }
}

// =================================================================================================
// Tests
// =================================================================================================
