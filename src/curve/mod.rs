//! Group arithmetic for small short-Weierstrass curves.
//!
//! This is the collaborator the solvers run on top of: affine points over a
//! prime field `y^2 = x^3 + a*x + b (mod p)`, with a generator of known prime
//! order `n`. All coordinates and scalars fit in `u64` (the curves here are
//! deliberately tiny), so field products go through `u128` and nothing else.

pub mod presets;

use std::fmt;

/// A group element: either the point at infinity or an affine pair.
///
/// Equality is structural, which is what the baby-step table and the walk
/// collision checks rely on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    Infinity,
    Affine { x: u64, y: u64 },
}

impl Point {
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }
}

/// Parameters of one curve: `y^2 = x^3 + a*x + b (mod p)`, generator `g` of
/// prime order `n`.
///
/// The struct is `Copy`: it is five words of constants, and the solvers pass
/// it around freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Curve {
    pub name: &'static str,
    /// Field modulus.
    pub p: u64,
    pub a: u64,
    pub b: u64,
    /// Generator of the full group.
    pub g: Point,
    /// Group order. Must be prime, so every non-identity point generates
    /// the whole group and every element has a logarithm base `g`.
    pub n: u64,
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\": y^2 = x^3 + {}x + {} (mod {})",
            self.name, self.a, self.b, self.p
        )
    }
}

impl Curve {
    /// Checks the curve equation. The point at infinity is on every curve.
    pub fn is_on_curve(&self, point: Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let lhs = mul_mod(y, y, self.p);
                let x3 = mul_mod(mul_mod(x, x, self.p), x, self.p);
                let rhs = add_mod(add_mod(x3, mul_mod(self.a, x, self.p), self.p), self.b, self.p);
                lhs == rhs
            }
        }
    }

    /// Group addition using the chord-and-tangent rule. Pure: returns a new
    /// point and never mutates its inputs.
    pub fn add(&self, p1: Point, p2: Point) -> Point {
        debug_assert!(self.is_on_curve(p1));
        debug_assert!(self.is_on_curve(p2));

        let (x1, y1) = match p1 {
            Point::Infinity => return p2,
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match p2 {
            Point::Infinity => return p1,
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 && add_mod(y1, y2, self.p) == 0 {
            // p1 == -p2
            return Point::Infinity;
        }

        let slope = if x1 == x2 {
            // Tangent: (3*x1^2 + a) / (2*y1). y1 != 0 here, otherwise the
            // branch above would have fired.
            let num = add_mod(mul_mod(3, mul_mod(x1, x1, self.p), self.p), self.a, self.p);
            let den = inverse_mod(mul_mod(2, y1, self.p), self.p)
                .expect("2*y1 is nonzero mod the prime field modulus");
            mul_mod(num, den, self.p)
        } else {
            let num = sub_mod(y2, y1, self.p);
            let den = inverse_mod(sub_mod(x2, x1, self.p), self.p)
                .expect("x2 - x1 is nonzero mod the prime field modulus");
            mul_mod(num, den, self.p)
        };

        let x3 = sub_mod(sub_mod(mul_mod(slope, slope, self.p), x1, self.p), x2, self.p);
        let y3 = sub_mod(mul_mod(slope, sub_mod(x1, x3, self.p), self.p), y1, self.p);
        Point::Affine { x: x3, y: y3 }
    }

    pub fn double(&self, point: Point) -> Point {
        self.add(point, point)
    }

    pub fn negate(&self, point: Point) -> Point {
        debug_assert!(self.is_on_curve(point));
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x,
                y: sub_mod(0, y, self.p),
            },
        }
    }

    /// Scalar multiplication `k * point` by double-and-add.
    pub fn mul(&self, k: u64, point: Point) -> Point {
        let mut k = k % self.n;
        let mut addend = point;
        let mut result = Point::Infinity;

        while k != 0 {
            if k & 1 == 1 {
                result = self.add(result, addend);
            }
            addend = self.double(addend);
            k >>= 1;
        }
        result
    }
}

pub(crate) fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

pub(crate) fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    let (a, b) = (a % m, b % m);
    if a >= b {
        a - b
    } else {
        m - b + a
    }
}

pub(crate) fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Modular inverse by the extended Euclidean algorithm.
///
/// Returns `None` when `gcd(a, m) != 1`. Every call site in this crate
/// inverts a nonzero residue modulo a prime, so `None` there means a broken
/// caller invariant, not a runtime condition.
pub fn inverse_mod(a: u64, m: u64) -> Option<u64> {
    let a = a % m;
    if a == 0 {
        return None;
    }

    let (mut old_r, mut r) = (a as i128, m as i128);
    let (mut old_s, mut s) = (1i128, 0i128);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }

    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m as i128) as u64)
}
