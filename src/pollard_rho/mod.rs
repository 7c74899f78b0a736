//! Pollard's Rho for discrete logarithms.
//!
//! A pseudo-random walk over linear combinations `a*P + b*Q` is run by two
//! cursors at different speeds (Floyd's tortoise and hare). When they land
//! on the same point, `a1*P + b1*Q == a2*P + b2*Q` and, unless `b1 == b2`,
//! the logarithm falls out as `(a1 - a2) * (b2 - b1)^-1 mod n`. Expected
//! O(sqrt(n)) walk length by the birthday paradox, O(1) state.
//!
//! A collision with `b1 == b2` cannot be resolved; the attempt is abandoned
//! and a new one starts with freshly sampled coefficients, up to a bounded
//! number of attempts.

mod walk;

use crate::curve::{inverse_mod, mul_mod, sub_mod};
use crate::errors::DlogError;
use crate::traits::{DlogProblem, DlogSolution, DlogSolver};
use rand::Rng;
use walk::WalkCoefficients;

/// Default bound on coefficient draws. A degenerate collision is rare for a
/// single instance; exhaustive sweeps should raise the bound through
/// [`PollardRho::with_max_attempts`] so one unlucky draw cannot fail the run.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Clone, Copy, Debug)]
pub struct PollardRho {
    max_attempts: u32,
}

impl Default for PollardRho {
    fn default() -> PollardRho {
        PollardRho::new()
    }
}

/// What a single attempt (one coefficient draw) ended with.
enum Attempt {
    Resolved { logarithm: u64, iterations: u64 },
    Degenerate { iterations: u64 },
    NoCollision { iterations: u64 },
}

impl PollardRho {
    pub fn new() -> PollardRho {
        PollardRho {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(max_attempts: u32) -> PollardRho {
        PollardRho { max_attempts }
    }

    pub fn solve_with_rng<R: Rng + ?Sized>(
        &self,
        problem: &DlogProblem,
        rng: &mut R,
    ) -> Result<DlogSolution, DlogError> {
        problem.check_preconditions()?;

        let mut steps = 0;
        for _ in 0..self.max_attempts {
            let coefficients = WalkCoefficients::sample(problem, rng);
            match self.run_attempt(problem, &coefficients) {
                Attempt::Resolved {
                    logarithm,
                    iterations,
                } => {
                    return Ok(DlogSolution {
                        logarithm,
                        steps: steps + iterations,
                    })
                }
                Attempt::Degenerate { iterations } | Attempt::NoCollision { iterations } => {
                    steps += iterations;
                }
            }
        }

        Err(DlogError::RetriesExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Runs tortoise and hare over one shared coefficient draw until they
    /// collide or the iteration cap `n` is hit. The cap is a safety bound;
    /// the expected collision time is far smaller.
    fn run_attempt(&self, problem: &DlogProblem, coefficients: &WalkCoefficients) -> Attempt {
        let n = problem.curve.n;
        let mut tortoise = coefficients.start();
        let mut hare = coefficients.start();

        for iteration in 0..n {
            tortoise.advance();
            hare.advance();
            hare.advance();

            if tortoise.point == hare.point {
                let iterations = iteration + 1;
                if tortoise.b == hare.b {
                    return Attempt::Degenerate { iterations };
                }

                // a1*P + b1*Q == a2*P + b2*Q, so x = (a1 - a2) / (b2 - b1).
                let num = sub_mod(tortoise.a, hare.a, n);
                let den = sub_mod(hare.b, tortoise.b, n);
                let inverse = inverse_mod(den, n)
                    .expect("b2 - b1 is a nonzero residue modulo the prime group order");
                return Attempt::Resolved {
                    logarithm: mul_mod(num, inverse, n),
                    iterations,
                };
            }
        }

        Attempt::NoCollision { iterations: n }
    }
}

impl DlogSolver for PollardRho {
    fn name(&self) -> &'static str {
        "pollard's rho"
    }

    fn solve(&self, problem: &DlogProblem) -> Result<DlogSolution, DlogError> {
        self.solve_with_rng(problem, &mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::presets::{NANO, TINY};
    use crate::curve::Point;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn recovers_every_logarithm_on_the_nano_group() {
        // Generous attempt budget: on a 29-element group a degenerate
        // collision per draw is not rare.
        let solver = PollardRho::with_max_attempts(64);
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        for x in 0..NANO.n {
            let problem = DlogProblem::new(NANO, NANO.g, NANO.mul(x, NANO.g));
            let solution = solver.solve_with_rng(&problem, &mut rng).unwrap();
            assert_eq!(solution.logarithm, x, "x={x}");
            assert!(solution.steps >= 1);
        }
    }

    #[test]
    fn resolution_survives_repeated_coefficient_draws() {
        let solver = PollardRho::with_max_attempts(16);
        let mut rng = ChaCha8Rng::seed_from_u64(22);

        for trial in 0..50 {
            let x = 1 + (trial * 199) % (TINY.n - 1);
            let problem = DlogProblem::new(TINY, TINY.g, TINY.mul(x, TINY.g));
            let solution = solver.solve_with_rng(&problem, &mut rng).unwrap();
            assert_eq!(solution.logarithm, x);
        }
    }

    #[test]
    fn rejects_off_curve_input() {
        let solver = PollardRho::new();
        let bogus = Point::Affine { x: 2, y: 2 };
        assert!(!NANO.is_on_curve(bogus));

        let problem = DlogProblem::new(NANO, NANO.g, bogus);
        assert_eq!(
            solver.solve(&problem).unwrap_err(),
            DlogError::PointNotOnCurve(bogus)
        );
    }

    #[test]
    fn zero_attempts_fails_immediately() {
        let solver = PollardRho::with_max_attempts(0);
        let problem = DlogProblem::new(NANO, NANO.g, NANO.mul(5, NANO.g));
        assert_eq!(
            solver.solve(&problem).unwrap_err(),
            DlogError::RetriesExhausted { attempts: 0 }
        );
    }
}
