//! Benchmarks every solver by recomputing the logarithm of each element of
//! the tiny demo group and cross-validating the results.
//!
//! Usage: cargo run --release --bin compare_logs -- [brute-force|bsgs|pollard-rho]
//!
//! With no argument all three solvers run in turn.

use anyhow::{bail, Result};
use std::env;
use tinycurve_dlog::brute_force::BruteForce;
use tinycurve_dlog::bsgs::BabyStepGiantStep;
use tinycurve_dlog::curve::presets::TINY;
use tinycurve_dlog::curve::Curve;
use tinycurve_dlog::pollard_rho::PollardRho;
use tinycurve_dlog::{sweep, DlogSolver};

fn main() -> Result<()> {
    let curve = TINY;
    println!("Curve order: {}", curve.n);

    match env::args().nth(1).as_deref() {
        None => {
            run(&curve, &BruteForce::new());
            run(&curve, &BabyStepGiantStep::new());
            run(&curve, &PollardRho::new());
        }
        Some("brute-force") => run(&curve, &BruteForce::new()),
        Some("bsgs") => run(&curve, &BabyStepGiantStep::new()),
        Some("pollard-rho") => run(&curve, &PollardRho::new()),
        Some(other) => {
            bail!("unknown algorithm {other:?} (expected brute-force, bsgs or pollard-rho)")
        }
    }
    Ok(())
}

fn run<S: DlogSolver + Sync>(curve: &Curve, solver: &S) {
    println!("Using {}", solver.name());

    let report = sweep::run_all(curve, solver, true);

    let total_seconds = report.elapsed.as_secs_f64();
    let minutes = (total_seconds / 60.0) as u64;
    let seconds = (total_seconds - 60.0 * minutes as f64).round() as u64;
    println!(
        "Took {}m {}s ({} steps on average)",
        minutes,
        seconds,
        report.average_steps.round() as u64
    );

    if report.mismatches > 0 || report.failures > 0 {
        eprintln!(
            "WARNING: {} mismatches, {} failures out of {} elements",
            report.mismatches, report.failures, report.elements
        );
    }
}
