//! Performance benchmarks for the FTCS solver and the best-fit search
//!
//! # What We're Measuring
//!
//! 1. **FTCS solver**: one stencil evaluation per interior point per step,
//!    so time should scale with `points × steps`
//! 2. **Best-fit search**: one interpolation and one scoring pass per step,
//!    so time should scale with `measured points × steps`
//! 3. **Full estimate**: the reference run (79 points, 250 steps, 40
//!    measured points), end to end
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench solver_performance
//!
//! # Only the solver
//! cargo bench --bench solver_performance ftcs
//!
//! # With intra-step parallelism
//! cargo bench --bench solver_performance --features parallel
//! ```
//!
//! # Understanding Results
//!
//! ```text
//! FTCS Solver/79          time:   [...]
//! FTCS Solver/790         time:   [...]   ~10× the line above
//! ```
//!
//! If scaling is **not linear**, the field (`points × (steps + 1)` f64
//! values) has probably left the cache.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use aptimer::prelude::*;

// =================================================================================================
// Setup helpers
// =================================================================================================

fn scenario(points: usize) -> Scenario {
    // dx = 0.5, grid starts at 1
    let length = 1.0 + 0.5 * (points - 1) as f64;
    let grid = SimulationGrid::build(length, 0.5).unwrap();
    Scenario::new(grid, BoundaryConditions::default())
}

fn config(steps: usize) -> SolverConfiguration {
    let d = ApatiteChlorine::new().diffusivity(900.0);
    let stability = StabilityRatio::analyze(d, 8000.0, 0.5).unwrap();
    SolverConfiguration::new(stability, 8000.0, steps)
}

fn measured(length: usize) -> MeasuredProfile {
    let pairs: Vec<(f64, f64)> = (1..=length)
        .map(|x| (x as f64, 0.96 + 0.24 * (-(x as f64) / 4.0).exp()))
        .collect();
    MeasuredProfile::from_pairs(&pairs, 0.02).unwrap()
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// FTCS scaling with grid size, 250 steps
fn benchmark_ftcs_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("FTCS Solver");
    let steps = 250;

    for points in [79, 790, 7900] {
        let scenario = scenario(points);
        let config = config(steps);
        let solver = FtcsSolver::new();

        group.throughput(Throughput::Elements((points * steps) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, _| {
            b.iter(|| {
                solver
                    .solve(black_box(&scenario), black_box(&config), None)
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Search scaling with step count on the reference grid
fn benchmark_best_fit_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Best-Fit Search");
    let profile = measured(40);

    for steps in [250, 1000, 4000] {
        let scenario = scenario(79);
        let field = FtcsSolver::new()
            .solve(&scenario, &config(steps), None)
            .unwrap();
        let search = BestFitSearch::new();

        group.throughput(Throughput::Elements((profile.len() * steps) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, _| {
            b.iter(|| {
                search
                    .search(black_box(&field), &scenario.grid, black_box(&profile), 8000.0)
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Reference run, end to end
fn benchmark_full_estimate(c: &mut Criterion) {
    let estimator = Estimator::new(Box::new(ApatiteChlorine::new()));
    let config = TimingConfiguration::default();
    let profile = measured(40);

    c.bench_function("Full estimate (reference)", |b| {
        b.iter(|| {
            estimator
                .estimate(black_box(&config), black_box(&profile), None)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    benchmark_ftcs_solver,
    benchmark_best_fit_search,
    benchmark_full_estimate,
);
criterion_main!(benches);
