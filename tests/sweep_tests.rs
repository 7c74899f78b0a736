//! Full-group sweeps: the harness must validate every element without a
//! single mismatch for a correct solver, and the average step counts must
//! land inside each algorithm's bound.

use tinycurve_dlog::brute_force::BruteForce;
use tinycurve_dlog::bsgs::BabyStepGiantStep;
use tinycurve_dlog::curve::presets::NANO;
use tinycurve_dlog::pollard_rho::PollardRho;
use tinycurve_dlog::sweep;

#[test]
fn brute_force_sweep_is_clean() {
    let report = sweep::run_all(&NANO, &BruteForce::new(), false);
    assert_eq!(report.mismatches, 0);
    assert_eq!(report.failures, 0);
    assert_eq!(report.elements, NANO.n);
    // Random start offsets: anything in (0, n] is possible, the mean
    // should sit well below the worst case.
    assert!(report.average_steps >= 1.0 && report.average_steps <= NANO.n as f64);
}

#[test]
fn bsgs_sweep_is_clean() {
    let m = BabyStepGiantStep::table_size(NANO.n);
    let report = sweep::run_all(&NANO, &BabyStepGiantStep::new(), false);
    assert_eq!(report.mismatches, 0);
    assert_eq!(report.failures, 0);
    assert!(report.average_steps <= (2 * m) as f64);
}

#[test]
fn pollard_rho_sweep_is_clean() {
    let solver = PollardRho::with_max_attempts(64);
    let report = sweep::run_all(&NANO, &solver, false);
    assert_eq!(report.mismatches, 0);
    assert_eq!(report.failures, 0);
    assert!(report.average_steps >= 1.0);
}
