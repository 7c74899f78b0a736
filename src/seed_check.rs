//! Verifiably-random curve parameter checking (ANSI X9.62 / SEC1).
//!
//! Published prime-field curves carry a 160-bit seed from which the `b`
//! coefficient was derived through SHA-1. Re-running the derivation and
//! checking `b^2 * c == a^3 (mod p)` shows the parameters were not chosen
//! with a hidden structure. This is unrelated to the solvers: it works on
//! full-size curve coefficients, so everything here is `BigUint`.
//!
//! Only exactly-160-bit seeds are accepted (the standard allows longer
//! ones; none of the published curves use them).

use num_bigint::BigUint;
use sha1::{Digest, Sha1};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedCheckError {
    #[error("seed is longer than 160 bits")]
    SeedTooLong,
    #[error("curve coefficients were not derived from the seed")]
    Mismatch,
}

/// The `(seed, p, a, b)` tuple of one published curve.
#[derive(Clone, Debug)]
pub struct DomainParameters {
    pub seed: BigUint,
    pub p: BigUint,
    pub a: BigUint,
    pub b: BigUint,
}

/// A registry entry: hex-encoded parameters as they appear in the OpenSSL
/// source (`crypto/ec/ec_curve.c`), plus deliberately corrupted entries
/// that must fail verification.
pub struct NamedCurve {
    pub name: &'static str,
    seed: &'static str,
    p: &'static str,
    a: &'static str,
    b: &'static str,
}

impl NamedCurve {
    pub fn parameters(&self) -> DomainParameters {
        let parse = |hex: &str| {
            BigUint::parse_bytes(hex.as_bytes(), 16).expect("registry entries are valid hex")
        };
        DomainParameters {
            seed: parse(self.seed),
            p: parse(self.p),
            a: parse(self.a),
            b: parse(self.b),
        }
    }
}

pub const REGISTRY: &[NamedCurve] = &[
    NamedCurve {
        name: "prime192v1",
        seed: "3045ae6fc8422f64ed579528d38120eae12196d5",
        p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
        a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
        b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    },
    NamedCurve {
        name: "prime239v1",
        seed: "e43bb460f0b80cc0c0b075798e948060f8321b7d",
        p: "7fffffffffffffffffffffff7fffffffffff8000000000007fffffffffff",
        a: "7fffffffffffffffffffffff7fffffffffff8000000000007ffffffffffc",
        b: "6b016c3bdcf18941d0d654921475ca71a9db2fb27d1d37796185c2942c0a",
    },
    NamedCurve {
        name: "prime256v1",
        seed: "c49d360886e704936a6678e1139d26b7819f7e90",
        p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
        b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    },
    NamedCurve {
        name: "secp112r1",
        seed: "00f50b028e4d696e676875615175290472783fb1",
        p: "db7c2abf62e35e668076bead208b",
        a: "db7c2abf62e35e668076bead2088",
        b: "659ef8ba043916eede8911702b22",
    },
    NamedCurve {
        name: "secp128r1",
        seed: "000e0d4d696e6768756151750cc03a4473d03679",
        p: "fffffffdffffffffffffffffffffffff",
        a: "fffffffdfffffffffffffffffffffffc",
        b: "e87579c11079f43dd824993c2cee5ed3",
    },
    NamedCurve {
        name: "secp160r1",
        seed: "1053cde42c14d696e67687561517533bf3f83345",
        p: "00ffffffffffffffffffffffffffffffff7fffffff",
        a: "00ffffffffffffffffffffffffffffffff7ffffffc",
        b: "001c97befc54bd7a8b65acf89f81d4d4adc565fa45",
    },
    NamedCurve {
        name: "secp224r1",
        seed: "bd71344799d5c7fcdc45b59fa3b9ab8f6a948bc5",
        p: "ffffffffffffffffffffffffffffffff000000000000000000000001",
        a: "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
        b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    },
    NamedCurve {
        name: "secp384r1",
        seed: "a335926aa319a27a1d00896a6773a4827acdac73",
        p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
        a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
        b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    },
    NamedCurve {
        name: "secp521r1",
        seed: "d09e8800291cb85396cc6717393284aaa0da64ba",
        p: "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        a: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc",
        b: "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
    },
    // prime192v1 with a corrupted seed.
    NamedCurve {
        name: "wrong192v1",
        seed: "123",
        p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
        a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
        b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    },
    // prime192v1 with a corrupted p.
    NamedCurve {
        name: "wrong192v2",
        seed: "3045ae6fc8422f64ed579528d38120eae12196d5",
        p: "123",
        a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
        b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    },
    // prime192v1 with a corrupted a.
    NamedCurve {
        name: "wrong192v3",
        seed: "3045ae6fc8422f64ed579528d38120eae12196d5",
        p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
        a: "123",
        b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    },
    // prime192v1 with a corrupted b.
    NamedCurve {
        name: "wrong192v4",
        seed: "3045ae6fc8422f64ed579528d38120eae12196d5",
        p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
        a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
        b: "123",
    },
];

const SEED_BITS: u64 = 160;
const SEED_BYTES: usize = (SEED_BITS / 8) as usize;

/// Checks that `(a, b)` were derived from the curve's seed.
///
/// The derivation rebuilds the candidate value `c` by hashing the seed and
/// its successors and concatenating the digests, then accepts iff
/// `b^2 * c == a^3 (mod p)`.
pub fn verify(curve: &DomainParameters) -> Result<(), SeedCheckError> {
    if curve.seed.bits() > SEED_BITS {
        return Err(SeedCheckError::SeedTooLong);
    }

    let seed_bytes = to_fixed_bytes_be(&curve.seed, SEED_BYTES);

    // t, s and v as the standard defines them.
    let t = curve.p.bits();
    let s = (t - 1) / SEED_BITS;
    let v = t - SEED_BITS * s;

    // c0: the v rightmost bits of SHA-1(seed). w0: c0 with its leftmost
    // bit cleared. w0 is emitted as a full 160-bit block; the extra zero
    // padding on the left does not change the resulting integer.
    let h = BigUint::from_bytes_be(&Sha1::digest(&seed_bytes));
    let low_v_bits = (BigUint::from(1u8) << v) - 1u8;
    let c0 = &h & &low_v_bits;
    let top_bit_cleared = (BigUint::from(1u8) << (v - 1)) - 1u8;
    let w0 = &c0 & &top_bit_cleared;

    let mut w = to_fixed_bytes_be(&w0, SEED_BYTES);
    let modulus = BigUint::from(1u8) << SEED_BITS;
    for i in 1..=s {
        let z_i = (curve.seed.clone() + i) % &modulus;
        let digest = Sha1::digest(&to_fixed_bytes_be(&z_i, SEED_BYTES));
        w.extend_from_slice(&digest);
    }

    let c = BigUint::from_bytes_be(&w);

    // Accept iff b^2 * c == a^3 (mod p).
    let lhs = &curve.b * &curve.b * c % &curve.p;
    let rhs = &curve.a * &curve.a * &curve.a % &curve.p;
    if lhs == rhs {
        Ok(())
    } else {
        Err(SeedCheckError::Mismatch)
    }
}

/// Big-endian encoding, left-padded with zeros to exactly `len` bytes.
fn to_fixed_bytes_be(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    debug_assert!(bytes.len() <= len);
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_curves_verify() {
        for entry in REGISTRY.iter().filter(|e| !e.name.starts_with("wrong")) {
            assert_eq!(verify(&entry.parameters()), Ok(()), "{}", entry.name);
        }
    }

    #[test]
    fn corrupted_curves_fail() {
        for entry in REGISTRY.iter().filter(|e| e.name.starts_with("wrong")) {
            assert_eq!(
                verify(&entry.parameters()),
                Err(SeedCheckError::Mismatch),
                "{}",
                entry.name
            );
        }
    }

    #[test]
    fn oversized_seed_is_rejected() {
        let mut parameters = REGISTRY[0].parameters();
        parameters.seed = BigUint::from(1u8) << 160;
        assert_eq!(verify(&parameters), Err(SeedCheckError::SeedTooLong));
    }
}
