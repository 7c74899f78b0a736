//! The common interface every discrete-log solver implements.

use crate::curve::{Curve, Point};
use crate::errors::DlogError;

/// One instance of the discrete logarithm problem: find `x` with
/// `target = x * base` in the group of `curve`.
///
/// `base` is expected to generate the whole group (always true here since
/// the group order is prime).
#[derive(Clone, Copy, Debug)]
pub struct DlogProblem {
    pub curve: Curve,
    pub base: Point,
    pub target: Point,
}

impl DlogProblem {
    pub fn new(curve: Curve, base: Point, target: Point) -> DlogProblem {
        DlogProblem {
            curve,
            base,
            target,
        }
    }

    /// On-curve precondition shared by every solver entry point.
    pub(crate) fn check_preconditions(&self) -> Result<(), DlogError> {
        for point in [self.base, self.target] {
            if !self.curve.is_on_curve(point) {
                return Err(DlogError::PointNotOnCurve(point));
            }
        }
        Ok(())
    }
}

/// A recovered logarithm together with the work it took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DlogSolution {
    /// The exponent, reduced into `[0, n)`.
    pub logarithm: u64,
    /// Group operations consumed, as counted by the algorithm's own metric.
    /// Always at least 1 for a solved instance.
    pub steps: u64,
}

/// Trait for discrete logarithm solvers.
///
/// Solvers are synchronous and run to completion (or hard failure) on the
/// calling thread; any internal randomness is drawn per call, so a shared
/// solver value can be used from many threads at once.
pub trait DlogSolver {
    /// Short stable name, used by the CLI to pick an algorithm.
    fn name(&self) -> &'static str;

    /// Solves the problem, returning the logarithm and the step count.
    fn solve(&self, problem: &DlogProblem) -> Result<DlogSolution, DlogError>;
}
