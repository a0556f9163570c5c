//! Cl-in-apatite timing estimate
//!
//! Estimates the duration of a 900 °C exchange from a measured Cl traverse.
//!
//! ```bash
//! # Built-in profile
//! cargo run --example apatite_timing
//!
//! # Two-column file (comma or tab separated, optional header)
//! cargo run --example apatite_timing -- Cl_Apa.txt
//! ```

use aptimer::prelude::*;
use std::error::Error;
use std::time::Instant;

/// Traverse shaped like a natural rim-to-core Cl profile (1..=40 µm)
fn builtin_profile(uncertainty: f64) -> aptimer::error::Result<MeasuredProfile> {
    let pairs: Vec<(f64, f64)> = (1..=40)
        .map(|x| {
            let x = x as f64;
            (x, 0.96 + 0.24 * (1.0 - (x / 7.0).tanh()))
        })
        .collect();
    MeasuredProfile::from_pairs(&pairs, uncertainty)
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Cl in apatite: diffusion timing ===\n");

    let config = TimingConfiguration::default();

    let profile = match std::env::args().nth(1) {
        Some(path) => {
            println!("Measured profile: {path}");
            load_profile(&path, config.uncertainty)?
        }
        None => {
            println!("Measured profile: built-in");
            builtin_profile(config.uncertainty)?
        }
    };

    let model = ApatiteChlorine::new();
    let axes = model.axis_diffusivities(config.temperature_c);

    println!("  Points: {}", profile.len());
    println!("  Length: {} um", profile.length());
    println!("\nPhysical Parameters:");
    println!("  Temperature: {} °C", config.temperature_c);
    println!("  D_a = {:e} um²/s", axes.a1);
    println!("  D_c = {:e} um²/s", axes.c);
    println!("  D_tra = {:e} um²/s", model.diffusivity(config.temperature_c));
    println!("\nConditions: {}", config.boundaries);
    println!("\nSimulation:");
    println!("  delta_x: {} um", config.delta_x);
    println!("  delta_t: {} s", config.delta_t);
    println!("  Steps: {}\n", config.iterations);

    let estimator = Estimator::new(Box::new(model));

    let mut next_report = 0.1;
    let mut progress = |fraction: f64| {
        if fraction + 1e-12 >= next_report {
            print!("{:.0}% ", fraction * 100.0);
            next_report += 0.1;
        }
    };

    let start = Instant::now();
    let estimate = match estimator.estimate(&config, &profile, Some(&mut progress)) {
        Ok(estimate) => estimate,
        Err(TimingError::NoFit { step, records, .. }) => {
            println!("\n\nNo fit: best step {step} matches no measured point.");
            println!("Match counts: {:?}", records.match_counts());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!("\n✓ Completed in {:.3}s\n", start.elapsed().as_secs_f64());

    println!("Stability ratio: {:.5}", estimate.stability.value());
    println!("{}\n", estimate.summary.total_time_line());

    let best = estimate.fit.best;
    println!(
        "Best step {} (bounds {}..{}), {} of {} points within uncertainty",
        best.best_step,
        best.lower_bound_step,
        best.upper_bound_step,
        estimate.fit.records.get(best.best_step).map_or(0, |r| r.match_count),
        profile.len()
    );
    if !estimate.fit.no_fit_steps.is_empty() {
        println!("{} steps fit no point", estimate.fit.no_fit_steps.len());
    }

    println!("\n{}\n", estimate.summary);

    println!("Best-fit model (every 5 um):");
    let x = estimate.model_positions();
    let y = estimate.best_profile();
    for i in (0..x.len()).step_by(10) {
        println!("  x = {:>5.1}  c = {:.4}", x[i], y[i]);
    }

    Ok(())
}
