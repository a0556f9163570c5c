//! Simulation scenario definition
//!
//! A scenario combines the spatial grid with the initial and boundary
//! concentrations: WHAT to simulate. The stability ratio, time step and
//! iteration count (HOW) live in [`SolverConfiguration`](crate::solver::SolverConfiguration).

use crate::error::Result;
use crate::solver::boundary::BoundaryConditions;
use crate::solver::grid::SimulationGrid;

/// Simulation scenario
///
/// The same scenario can be run with several configurations, e.g. to compare
/// time steps.
///
/// # Examples
///
/// ```rust
/// use aptimer::solver::{BoundaryConditions, Scenario, SimulationGrid};
///
/// let grid = SimulationGrid::build(40.0, 0.5).unwrap();
/// let scenario = Scenario::new(grid, BoundaryConditions::default());
/// assert_eq!(scenario.points(), 79);
/// ```
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Model points
    pub grid: SimulationGrid,

    /// Initial interior value and fixed end values
    pub conditions: BoundaryConditions,
}

impl Scenario {
    /// Create a scenario
    pub fn new(grid: SimulationGrid, conditions: BoundaryConditions) -> Self {
        Self { grid, conditions }
    }

    /// Verifying scenario content (mainly boundaries)
    pub fn validate(&self) -> Result<()> {
        self.conditions.validate()
    }

    /// Number of model points
    pub fn points(&self) -> usize {
        self.grid.len()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
