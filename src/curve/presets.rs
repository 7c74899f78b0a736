//! Built-in curve parameter sets.
//!
//! Both groups have prime order and cofactor 1, so any non-identity point is
//! a generator. The orders are small enough that a full-group sweep with the
//! brute-force solver stays tractable.

use crate::curve::{Curve, Point};

/// The default demo curve: `y^2 = x^3 + x - 1 (mod 10177)`, order 10331.
pub const TINY: Curve = Curve {
    name: "tiny",
    p: 10177,
    a: 1,
    b: 10176, // -1 mod p
    g: Point::Affine { x: 1, y: 1 },
    n: 10331,
};

/// A 29-element group for exhaustive tests: `y^2 = x^3 + x + 4 (mod 23)`.
pub const NANO: Curve = Curve {
    name: "nano",
    p: 23,
    a: 1,
    b: 4,
    g: Point::Affine { x: 0, y: 2 },
    n: 29,
};
