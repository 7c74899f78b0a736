//! Exhaustive-scan discrete logarithm solver.
//!
//! Walks the whole cyclic group once, starting from a random offset so the
//! expected cost over many instances is n/2 additions rather than being
//! correlated with the size of the exponent.

use crate::errors::DlogError;
use crate::traits::{DlogProblem, DlogSolution, DlogSolver};
use rand::Rng;

#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl BruteForce {
    pub fn new() -> BruteForce {
        BruteForce
    }

    /// Scans `R = s*P, (s+1)*P, ...` until it hits `Q`.
    ///
    /// Termination within `n` steps is guaranteed: the scan visits every
    /// element of the cyclic group exactly once.
    pub fn solve_with_rng<R: Rng + ?Sized>(
        &self,
        problem: &DlogProblem,
        rng: &mut R,
    ) -> Result<DlogSolution, DlogError> {
        problem.check_preconditions()?;

        let curve = &problem.curve;
        let start = rng.gen_range(0..curve.n);
        let mut running = curve.mul(start, problem.base);

        for x in 0..curve.n {
            if running == problem.target {
                return Ok(DlogSolution {
                    logarithm: (start + x) % curve.n,
                    steps: x + 1,
                });
            }
            running = curve.add(running, problem.base);
        }

        // Reachable only if the group parameters are inconsistent.
        Err(DlogError::Exhausted { scanned: curve.n })
    }
}

impl DlogSolver for BruteForce {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn solve(&self, problem: &DlogProblem) -> Result<DlogSolution, DlogError> {
        self.solve_with_rng(problem, &mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::presets::NANO;
    use crate::curve::Point;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn recovers_every_logarithm() {
        let solver = BruteForce::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for x in 0..NANO.n {
            let problem = DlogProblem::new(NANO, NANO.g, NANO.mul(x, NANO.g));
            let solution = solver.solve_with_rng(&problem, &mut rng).unwrap();
            assert_eq!(solution.logarithm, x);
            assert!(solution.steps >= 1 && solution.steps <= NANO.n);
        }
    }

    #[test]
    fn rejects_off_curve_input() {
        let solver = BruteForce::new();
        let bogus = Point::Affine { x: 3, y: 3 };
        assert!(!NANO.is_on_curve(bogus));

        let problem = DlogProblem::new(NANO, NANO.g, bogus);
        assert_eq!(
            solver.solve(&problem),
            Err(DlogError::PointNotOnCurve(bogus))
        );
    }
}
