//! Named curves.
//!
//! Domain parameters from [SEC 2: Recommended Elliptic Curve Domain Parameters](https://www.secg.org/sec2-v2.pdf).

use crate::{Curve, CurveParams};
use hex_literal::hex;
use num_bigint::BigUint;

fn curve(a: &[u8], b: &[u8], p: &[u8], n: &[u8], gx: &[u8], gy: &[u8]) -> Curve {
    Curve::from_params_unchecked(CurveParams {
        a: BigUint::from_bytes_be(a),
        b: BigUint::from_bytes_be(b),
        p: BigUint::from_bytes_be(p),
        n: Some(BigUint::from_bytes_be(n)),
        generator: Some((BigUint::from_bytes_be(gx), BigUint::from_bytes_be(gy))),
    })
}

/// NIST P-256 a.k.a. secp256r1 a.k.a. prime256v1.
pub fn secp256r1() -> Curve {
    curve(
        &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
        &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
        &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    )
}

/// The secp256k1 elliptic curve used by Bitcoin.
pub fn secp256k1() -> Curve {
    curve(
        &hex!("00"),
        &hex!("07"),
        &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
        &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
        &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    )
}

/// NIST P-224 a.k.a. secp224r1.
pub fn secp224r1() -> Curve {
    curve(
        &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
        &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
        &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
        &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
        &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
        &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
    )
}
