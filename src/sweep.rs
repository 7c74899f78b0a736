//! Full-group correctness sweep and step-count benchmark.
//!
//! For every `x in [0, n)` the harness derives `Q = x * g`, hands the
//! instance to the solver and checks the recovered logarithm against `x`.
//! Jobs are independent (fresh randomness, fresh `Q` each), so they are
//! fanned out over a pool of OS threads and collected in whatever order
//! they finish. A wrong answer is reported and counted but never aborts
//! the run.

use crate::curve::Curve;
use crate::traits::{DlogProblem, DlogSolver};
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Print a progress line every this many collected results.
const PROGRESS_INTERVAL: u64 = 100;

/// Aggregate outcome of one sweep.
#[derive(Clone, Copy, Debug)]
pub struct SweepReport {
    /// Group order, i.e. the number of instances solved.
    pub elements: u64,
    /// Mean step count over all solved instances.
    pub average_steps: f64,
    /// Results that disagreed with the planted exponent.
    pub mismatches: u64,
    /// Instances where the solver returned a hard error.
    pub failures: u64,
    pub elapsed: Duration,
}

/// Recomputes the logarithm of every group element with `solver`.
///
/// The pool is sized to the available hardware parallelism. Workers pull
/// the next exponent from a shared counter and push results through a
/// channel; the calling thread accumulates statistics as results arrive
/// (completion order, not submission order) and, when `progress` is set,
/// keeps a best-effort percentage line updated on stdout.
pub fn run_all<S>(curve: &Curve, solver: &S, progress: bool) -> SweepReport
where
    S: DlogSolver + Sync,
{
    let workers = thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(1);
    let started = Instant::now();

    let next_exponent = AtomicU64::new(0);
    let (sender, receiver) = mpsc::channel();

    let mut total_steps = 0u64;
    let mut mismatches = 0u64;
    let mut failures = 0u64;

    thread::scope(|scope| {
        for _ in 0..workers {
            let sender = sender.clone();
            let next_exponent = &next_exponent;
            scope.spawn(move || loop {
                let x = next_exponent.fetch_add(1, Ordering::Relaxed);
                if x >= curve.n {
                    break;
                }
                let problem = DlogProblem::new(*curve, curve.g, curve.mul(x, curve.g));
                if sender.send((x, solver.solve(&problem))).is_err() {
                    break;
                }
            });
        }
        // Workers hold the remaining clones; dropping ours lets the
        // receiver loop end once they are done.
        drop(sender);

        for (index, (x, result)) in receiver.iter().enumerate() {
            match result {
                Ok(solution) => {
                    total_steps += solution.steps;
                    if solution.logarithm != x {
                        mismatches += 1;
                        eprintln!("\nERROR: expected {}, got {}", x, solution.logarithm);
                    }
                }
                Err(error) => {
                    failures += 1;
                    eprintln!("\nERROR: solving for {x} failed: {error}");
                }
            }

            if progress && index as u64 % PROGRESS_INTERVAL == 0 {
                let percent = 100.0 * index as f64 / (curve.n - 1).max(1) as f64;
                print!("\rComputing all logarithms: {percent:.2}% done");
                let _ = std::io::stdout().flush();
            }
        }
    });

    if progress {
        println!("\rComputing all logarithms: 100.00% done");
    }

    SweepReport {
        elements: curve.n,
        average_steps: total_steps as f64 / curve.n as f64,
        mismatches,
        failures,
        elapsed: started.elapsed(),
    }
}
