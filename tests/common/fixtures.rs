//! Reference runs shared by the integration tests
//!
//! The reference case is Cl in apatite at 900 °C on a 40 µm traverse with the
//! default discretization (dx 0.5 µm, dt 8000 s, 250 steps) and conditions
//! 0.96 / 1.2 / 0.96. Its "measured" profile is the model itself at step 120,
//! sampled every micrometre and rounded to three decimals.

use aptimer::fit::LinearInterpolator;
use aptimer::prelude::*;

/// Traverse length of the reference case (µm)
pub const REFERENCE_LENGTH: usize = 40;

/// Step the reference profile is sampled from
pub const REFERENCE_STEP: usize = 120;

pub fn reference_config() -> TimingConfiguration {
    TimingConfiguration::default()
}

/// Run the apatite model for `config` on a traverse of `length` µm
pub fn simulate(config: &TimingConfiguration, length: f64) -> (SimulationGrid, ConcentrationField) {
    let diffusivity = ApatiteChlorine::new().diffusivity(config.temperature_c);
    let grid = SimulationGrid::build(length, config.delta_x).unwrap();
    let stability = StabilityRatio::analyze(diffusivity, config.delta_t, config.delta_x).unwrap();

    let scenario = Scenario::new(grid.clone(), config.boundaries);
    let solver_config = SolverConfiguration::new(stability, config.delta_t, config.iterations);
    let field = FtcsSolver::new().solve(&scenario, &solver_config, None).unwrap();

    (grid, field)
}

/// Column `step` sampled at 1, 2, ..., `length` µm, rounded to 3 decimals
pub fn synthetic_profile(
    grid: &SimulationGrid,
    field: &ConcentrationField,
    step: usize,
    length: usize,
    uncertainty: f64,
) -> MeasuredProfile {
    let distances: Vec<f64> = (1..=length).map(|x| x as f64).collect();
    let values = LinearInterpolator::new(grid.positions(), &distances).evaluate(field.column(step));

    let pairs: Vec<(f64, f64)> = distances
        .iter()
        .zip(values)
        .map(|(&x, c)| (x, (c * 1000.0).round() / 1000.0))
        .collect();

    MeasuredProfile::from_pairs(&pairs, uncertainty).unwrap()
}

/// The reference "measured" profile
pub fn reference_profile() -> MeasuredProfile {
    let config = reference_config();
    let (grid, field) = simulate(&config, REFERENCE_LENGTH as f64);
    synthetic_profile(&grid, &field, REFERENCE_STEP, REFERENCE_LENGTH, config.uncertainty)
}
