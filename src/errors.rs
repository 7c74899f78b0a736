//! Error taxonomy shared by all solvers.

use crate::curve::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DlogError {
    /// An input point failed the on-curve precondition. Caller error; never
    /// retried.
    #[error("point {0:?} is not on the curve")]
    PointNotOnCurve(Point),

    /// Brute force or BSGS scanned its full bound without a match. With
    /// consistent group parameters this cannot happen.
    #[error("logarithm not found after scanning {scanned} candidates")]
    Exhausted { scanned: u64 },

    /// Pollard's Rho burned through every attempt without a usable
    /// (non-degenerate) collision.
    #[error("logarithm not found: no usable collision in {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}
