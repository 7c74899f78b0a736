//! The pseudo-random walk underlying Pollard's Rho.
//!
//! One `WalkCoefficients` value holds the per-attempt randomness; both the
//! tortoise and the hare are `Walk` cursors created from the same
//! coefficients, so they traverse the identical sequence and a collision is
//! guaranteed once the walk enters its cycle.

use crate::curve::{add_mod, mul_mod, Curve, Point};
use crate::traits::DlogProblem;
use rand::Rng;

/// Per-attempt randomness: two fixed exponent pairs and their combination
/// points `X1 = a1*P + b1*Q`, `X2 = a2*P + b2*Q`.
pub(crate) struct WalkCoefficients {
    curve: Curve,
    /// Width of one third of the x-coordinate range, used to classify points.
    partition_size: u64,
    a1: u64,
    b1: u64,
    x1: Point,
    a2: u64,
    b2: u64,
    x2: Point,
}

impl WalkCoefficients {
    pub fn sample<R: Rng + ?Sized>(problem: &DlogProblem, rng: &mut R) -> WalkCoefficients {
        let curve = problem.curve;
        let a1 = rng.gen_range(1..curve.n);
        let b1 = rng.gen_range(1..curve.n);
        let a2 = rng.gen_range(1..curve.n);
        let b2 = rng.gen_range(1..curve.n);

        let combine = |a, b| {
            curve.add(
                curve.mul(a, problem.base),
                curve.mul(b, problem.target),
            )
        };

        WalkCoefficients {
            curve,
            partition_size: curve.p / 3 + 1,
            a1,
            b1,
            x1: combine(a1, b1),
            a2,
            b2,
            x2: combine(a2, b2),
        }
    }

    /// A fresh cursor at the walk's origin (`0*P + 0*Q`).
    pub fn start(&self) -> Walk<'_> {
        Walk {
            coefficients: self,
            point: Point::Infinity,
            a: 0,
            b: 0,
        }
    }

    /// Which of the three transition rules applies to `point`. The identity
    /// is put in class 0 together with the first third of the plane.
    fn class_of(&self, point: Point) -> u64 {
        match point {
            Point::Infinity => 0,
            Point::Affine { x, .. } => x / self.partition_size,
        }
    }
}

/// One cursor over the walk sequence. Maintains the invariant
/// `point == a*P + b*Q` across every transition.
pub(crate) struct Walk<'c> {
    coefficients: &'c WalkCoefficients,
    pub point: Point,
    pub a: u64,
    pub b: u64,
}

impl Walk<'_> {
    /// Applies one transition, chosen by the current point's class.
    pub fn advance(&mut self) {
        let coefficients = self.coefficients;
        let curve = &coefficients.curve;

        match coefficients.class_of(self.point) {
            0 => {
                self.a = add_mod(self.a, coefficients.a1, curve.n);
                self.b = add_mod(self.b, coefficients.b1, curve.n);
                self.point = curve.add(self.point, coefficients.x1);
            }
            1 => {
                self.a = mul_mod(self.a, 2, curve.n);
                self.b = mul_mod(self.b, 2, curve.n);
                self.point = curve.double(self.point);
            }
            _ => {
                self.a = add_mod(self.a, coefficients.a2, curve.n);
                self.b = add_mod(self.b, coefficients.b2, curve.n);
                self.point = curve.add(self.point, coefficients.x2);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::presets::{NANO, TINY};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn cursor_maintains_linear_combination_invariant() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let problem = DlogProblem::new(TINY, TINY.g, TINY.mul(77, TINY.g));
        let coefficients = WalkCoefficients::sample(&problem, &mut rng);

        let mut walk = coefficients.start();
        for _ in 0..500 {
            walk.advance();
            let expected = TINY.add(
                TINY.mul(walk.a, problem.base),
                TINY.mul(walk.b, problem.target),
            );
            assert_eq!(walk.point, expected);
        }
    }

    #[test]
    fn cursors_from_shared_coefficients_agree() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let problem = DlogProblem::new(NANO, NANO.g, NANO.mul(9, NANO.g));
        let coefficients = WalkCoefficients::sample(&problem, &mut rng);

        let mut slow = coefficients.start();
        let mut fast = coefficients.start();
        for _ in 0..200 {
            slow.advance();
            fast.advance();
            assert_eq!(slow.point, fast.point);
            assert_eq!((slow.a, slow.b), (fast.a, fast.b));
        }
    }

    #[test]
    fn classes_cover_exactly_three_buckets() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let problem = DlogProblem::new(TINY, TINY.g, TINY.mul(3, TINY.g));
        let coefficients = WalkCoefficients::sample(&problem, &mut rng);

        assert_eq!(coefficients.class_of(Point::Infinity), 0);
        for x in [0, TINY.p / 3, 2 * TINY.p / 3, TINY.p - 1] {
            let class = coefficients.class_of(Point::Affine { x, y: 0 });
            assert!(class <= 2, "x={x} fell in class {class}");
        }
    }
}
