//! Instance generation helpers shared by the binaries, tests and benches.

use crate::curve::Curve;
use crate::traits::DlogProblem;
use rand::Rng;

/// Draws a uniform exponent in `[0, n)`.
pub fn random_scalar<R: Rng + ?Sized>(curve: &Curve, rng: &mut R) -> u64 {
    rng.gen_range(0..curve.n)
}

/// Generates a random discrete log instance on `curve`: a planted exponent
/// `x` and the problem `(g, x * g)`.
pub fn random_instance<R: Rng + ?Sized>(curve: &Curve, rng: &mut R) -> (u64, DlogProblem) {
    let x = random_scalar(curve, rng);
    let target = curve.mul(x, curve.g);
    (x, DlogProblem::new(*curve, curve.g, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::presets::NANO;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_scalar_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(random_scalar(&NANO, &mut rng) < NANO.n);
        }
    }

    #[test]
    fn random_instance_is_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..100 {
            let (x, problem) = random_instance(&NANO, &mut rng);
            assert_eq!(problem.target, NANO.mul(x, NANO.g));
            assert!(problem.curve.is_on_curve(problem.target));
        }
    }
}
