//! Baby-step giant-step: the classic meet-in-the-middle solver.
//!
//! With `m = floor(sqrt(n)) + 1`, every exponent `x in [0, n)` decomposes
//! uniquely as `x = a + m*b` with `0 <= a < m`. The baby phase tabulates
//! `a*P` for all `a`; the giant phase walks `Q, Q - m*P, Q - 2m*P, ...`
//! until it lands on a table entry. O(sqrt(n)) time and space, fully
//! deterministic.

use crate::curve::Point;
use crate::errors::DlogError;
use crate::traits::{DlogProblem, DlogSolution, DlogSolver};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default)]
pub struct BabyStepGiantStep;

impl BabyStepGiantStep {
    pub fn new() -> BabyStepGiantStep {
        BabyStepGiantStep
    }

    /// The number of baby steps for a group of order `n`.
    pub fn table_size(n: u64) -> u64 {
        (n as f64).sqrt() as u64 + 1
    }

    /// Builds the baby-step table: point -> exponent for `a = 0..m`, with
    /// the identity mapped to 0.
    fn baby_steps(problem: &DlogProblem, m: u64) -> HashMap<Point, u64> {
        let curve = &problem.curve;
        let mut table = HashMap::with_capacity(m as usize);
        let mut running = Point::Infinity;

        table.insert(running, 0);
        for a in 1..m {
            running = curve.add(running, problem.base);
            table.insert(running, a);
        }
        table
    }
}

impl DlogSolver for BabyStepGiantStep {
    fn name(&self) -> &'static str {
        "baby-step giant-step"
    }

    fn solve(&self, problem: &DlogProblem) -> Result<DlogSolution, DlogError> {
        problem.check_preconditions()?;

        let curve = &problem.curve;
        let m = Self::table_size(curve.n);
        let table = Self::baby_steps(problem, m);

        // Giant steps: R = Q - b*(m*P). A hit at (a, b) means x = a + m*b.
        let giant_step = curve.mul(m, curve.negate(problem.base));
        let mut running = problem.target;

        for b in 0..m {
            if let Some(&a) = table.get(&running) {
                return Ok(DlogSolution {
                    logarithm: (a + m * b) % curve.n,
                    steps: m + b,
                });
            }
            running = curve.add(running, giant_step);
        }

        // Every x < n has a decomposition, so a miss after m giant steps
        // means the group parameters are inconsistent.
        Err(DlogError::Exhausted { scanned: m })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::presets::{NANO, TINY};

    #[test]
    fn recovers_every_logarithm() {
        let solver = BabyStepGiantStep::new();
        let m = BabyStepGiantStep::table_size(NANO.n);

        for x in 0..NANO.n {
            let problem = DlogProblem::new(NANO, NANO.g, NANO.mul(x, NANO.g));
            let solution = solver.solve(&problem).unwrap();
            assert_eq!(solution.logarithm, x);
            assert!(solution.steps >= 1 && solution.steps <= 2 * m);
        }
    }

    #[test]
    fn table_size_is_ceil_sqrt() {
        assert_eq!(BabyStepGiantStep::table_size(NANO.n), 6);
        assert_eq!(BabyStepGiantStep::table_size(TINY.n), 102);
    }

    #[test]
    fn baby_table_has_one_entry_per_exponent() {
        let problem = DlogProblem::new(NANO, NANO.g, NANO.g);
        let m = BabyStepGiantStep::table_size(NANO.n);
        let table = BabyStepGiantStep::baby_steps(&problem, m);

        // m distinct points, exponents 0..m each appearing once.
        assert_eq!(table.len(), m as usize);
        let mut seen: Vec<u64> = table.values().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..m).collect::<Vec<_>>());
        assert_eq!(table[&Point::Infinity], 0);
    }

    #[test]
    fn deterministic_across_calls() {
        let solver = BabyStepGiantStep::new();
        let problem = DlogProblem::new(TINY, TINY.g, TINY.mul(5000, TINY.g));

        let first = solver.solve(&problem).unwrap();
        let second = solver.solve(&problem).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.logarithm, 5000);
    }

    #[test]
    fn rejects_off_curve_input() {
        let solver = BabyStepGiantStep::new();
        let bogus = Point::Affine { x: 1, y: 2 };
        assert!(!NANO.is_on_curve(bogus));

        let problem = DlogProblem::new(NANO, bogus, NANO.g);
        assert_eq!(
            solver.solve(&problem),
            Err(DlogError::PointNotOnCurve(bogus))
        );
    }
}
