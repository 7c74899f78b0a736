//! Solves one random instance on the tiny demo curve.
//!
//! Usage: cargo run --bin solve_random -- [brute-force|bsgs|pollard-rho]

use anyhow::{bail, ensure, Result};
use std::env;
use tinycurve_dlog::brute_force::BruteForce;
use tinycurve_dlog::bsgs::BabyStepGiantStep;
use tinycurve_dlog::curve::presets::TINY;
use tinycurve_dlog::curve::Point;
use tinycurve_dlog::pollard_rho::PollardRho;
use tinycurve_dlog::{utils, DlogSolver};

fn main() -> Result<()> {
    let algorithm = env::args().nth(1).unwrap_or_else(|| "bsgs".to_string());
    let solver: Box<dyn DlogSolver> = match algorithm.as_str() {
        "brute-force" => Box::new(BruteForce::new()),
        "bsgs" => Box::new(BabyStepGiantStep::new()),
        "pollard-rho" => Box::new(PollardRho::new()),
        other => bail!("unknown algorithm {other:?} (expected brute-force, bsgs or pollard-rho)"),
    };

    let curve = TINY;
    let (x, problem) = utils::random_instance(&curve, &mut rand::thread_rng());

    println!("Curve: {curve}");
    println!("Curve order: {}", curve.n);
    print_point("p", problem.base);
    print_point("q", problem.target);
    println!("{x} * p = q");

    let solution = solver.solve(&problem)?;
    println!("log(p, q) = {}", solution.logarithm);
    println!("Took {} steps", solution.steps);

    ensure!(
        solution.logarithm == x,
        "recovered logarithm {} does not match the planted exponent {x}",
        solution.logarithm
    );
    Ok(())
}

fn print_point(label: &str, point: Point) {
    match point {
        Point::Affine { x, y } => println!("{label} = (0x{x:x}, 0x{y:x})"),
        Point::Infinity => println!("{label} = infinity"),
    }
}
