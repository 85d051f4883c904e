#![no_main]
// Targets: secp256r1, secp256k1, secp224r1
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use weierstrass::{
    Curve, Point,
    curves::{secp224r1, secp256k1, secp256r1},
};

fn test_group(curve: &Curve, k1: &BigUint, k2: &BigUint, data: &[u8]) {
    let g = curve.generator().unwrap();
    let p1 = g.mul(k1).unwrap();
    let p2 = g.mul(k2).unwrap();

    // Arbitrary coordinates must either land on the curve or be rejected
    let half = data.len() / 2;
    let x = BigUint::from_bytes_be(&data[..half]);
    let y = BigUint::from_bytes_be(&data[half..]);
    if let Ok(p) = Point::new(x.clone(), y.clone(), curve) {
        assert!(curve.contains(&x, &y));
        assert!(p.add(&-&p).unwrap().is_identity());
    }

    let sum = p1.add(&p2).unwrap();

    // Test that addition and doubling are consistent
    assert_eq!(p1.double().unwrap(), p1.add(&p1).unwrap());

    // Test that negation works correctly
    assert!(sum.add(&-&sum).unwrap().is_identity());

    // Test scalar multiplication distributive property
    assert_eq!(g.mul(&(k1 + k2)).unwrap(), sum);
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }

    let k1 = BigUint::from_bytes_be(&data[0..32]);
    let k2 = BigUint::from_bytes_be(&data[32..64]);
    let rest = &data[64..];

    for curve in [secp256r1(), secp256k1(), secp224r1()] {
        test_group(&curve, &k1, &k2, rest);
    }
});
