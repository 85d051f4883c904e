//! ECDSA tests.

use hex_literal::hex;
use num_bigint::BigUint;
use proptest::prelude::*;
use rand_core::OsRng;
use weierstrass::{
    Curve, Error,
    curves::{secp224r1, secp256k1, secp256r1},
    ecdsa::{RandomizedSigner, Signature, Signer, SigningKey, Verifier, VerifyingKey},
};

fn uint(n: u32) -> BigUint {
    BigUint::from(n)
}

/// `y² = x³ + 2x + 3` over `𝔽₉₇`, generator `(3, 6)` of order 5.
fn curve97() -> Curve {
    Curve::new(uint(2), uint(3), uint(97))
        .with_order(uint(5))
        .with_generator(uint(3), uint(6))
        .unwrap()
}

prop_compose! {
    /// A nonempty message and the index of one of its bits.
    fn message_and_bit()(msg in prop::collection::vec(any::<u8>(), 1..64))
        (bit in 0..msg.len() * 8, msg in Just(msg)) -> (Vec<u8>, usize) {
        (msg, bit)
    }
}

prop_compose! {
    fn signing_key()(bytes in any::<[u8; 32]>()) -> SigningKey {
        let curve = secp256r1();
        let n = curve.order().unwrap();
        let d = BigUint::from_bytes_be(&bytes) % (n - 1u32) + 1u32;
        SigningKey::new(&curve, d).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_verify_round_trip(sk in signing_key(), msg in any::<Vec<u8>>()) {
        let signature = sk.sign(&msg).unwrap();
        prop_assert!(sk.verifying_key().verify(&msg, &signature));
    }

    #[test]
    fn flipped_message_bit_rejected(sk in signing_key(), (msg, bit) in message_and_bit()) {
        let signature = sk.sign(&msg).unwrap();

        let mut tampered = msg.clone();
        tampered[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!sk.verifying_key().verify(&tampered, &signature));
    }

    #[test]
    fn extended_message_rejected(sk in signing_key(), msg in any::<Vec<u8>>()) {
        let signature = sk.sign(&msg).unwrap();

        let mut tampered = msg.clone();
        tampered.push(0);
        prop_assert!(!sk.verifying_key().verify(&tampered, &signature));
    }

    #[test]
    fn tampered_signature_rejected(sk in signing_key()) {
        let signature = sk.sign(b"test").unwrap();
        let (r, s) = signature.split_scalars();
        let n = sk.curve().order().unwrap();

        let bumped_r = Signature::new((&r + 1u32) % n, s.clone());
        prop_assert!(!sk.verifying_key().verify(b"test", &bumped_r));

        let bumped_s = Signature::new(r.clone(), (&s + 1u32) % n);
        prop_assert!(!sk.verifying_key().verify(b"test", &bumped_s));

        let swapped = Signature::new(s, r);
        prop_assert!(!sk.verifying_key().verify(b"test", &swapped));
    }
}

#[test]
fn small_curve() {
    let curve = curve97();

    // d = 5 equals the subgroup order
    assert_eq!(SigningKey::new(&curve, uint(5)).unwrap_err(), Error::InvalidRange);

    let key = SigningKey::new(&curve, uint(3)).unwrap();
    let first = key.sign(b"test").unwrap();
    let second = key.sign(b"test").unwrap();

    assert!(key.verifying_key().verify(b"test", &first));
    assert!(key.verifying_key().verify(b"test", &second));

    // [k] G has x ∈ {3, 80} for every nonce, and 80 ≡ 0 (mod 5) is redrawn
    assert_eq!(first.r(), &uint(3));
    assert_eq!(second.r(), &uint(3));

    // with d = 2 every nonce gives s = 0 for this message
    let key = SigningKey::new(&curve, uint(2)).unwrap();
    assert_eq!(key.sign(b"test").unwrap_err(), Error::NonceExhausted);
}

#[test]
fn fresh_nonce_per_signature() {
    let key = SigningKey::random(&secp256r1(), &mut OsRng).unwrap();
    let first = key.sign(b"test").unwrap();
    let second = key.sign(b"test").unwrap();

    assert_ne!(first.r(), second.r());
    assert!(key.verifying_key().verify(b"test", &first));
    assert!(key.verifying_key().verify(b"test", &second));
}

#[test]
fn foreign_key_rejected() {
    let curve = secp256r1();
    let alice = SigningKey::random(&curve, &mut OsRng).unwrap();
    let bob = SigningKey::random(&curve, &mut OsRng).unwrap();

    let signature = alice.sign(b"test").unwrap();
    assert!(!bob.verifying_key().verify(b"test", &signature));
}

#[test]
fn every_named_curve() {
    for curve in [secp256r1(), secp256k1(), secp224r1()] {
        let key = SigningKey::random(&curve, &mut OsRng).unwrap();
        let signature = key.sign(b"named curve").unwrap();
        assert!(key.verifying_key().verify(b"named curve", &signature));
    }
}

#[test]
fn verify_fixed_signature() {
    let curve = secp256r1();
    let q = curve
        .point(
            BigUint::from_bytes_be(&hex!(
                "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6"
            )),
            BigUint::from_bytes_be(&hex!(
                "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299"
            )),
        )
        .unwrap();
    let verifying_key = VerifyingKey::from_point(q).unwrap();

    let signature = Signature::new(
        BigUint::from_bytes_be(&hex!(
            "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716"
        )),
        BigUint::from_bytes_be(&hex!(
            "765c7318ccb607c1d05cde59d5fc110cdfbd048f90bdcf410d00d201eaa0e2b0"
        )),
    );

    assert!(verifying_key.verify(b"sample", &signature));
    assert!(Verifier::verify(&verifying_key, b"sample", &signature).is_ok());
    assert!(Verifier::verify(&verifying_key, b"example", &signature).is_err());
}

#[test]
fn signature_traits() {
    let key = SigningKey::random(&secp256k1(), &mut OsRng).unwrap();

    let signature: Signature = key.try_sign(b"traits").unwrap();
    assert!(key.verifying_key().verify(b"traits", &signature));

    let signature: Signature = key.try_sign_with_rng(&mut OsRng, b"traits").unwrap();
    assert!(Verifier::verify(key.verifying_key(), b"traits", &signature).is_ok());
}

#[test]
fn signed_message() {
    let key = SigningKey::random(&secp256r1(), &mut OsRng).unwrap();
    let signed = key.sign_message(b"hello".to_vec()).unwrap();
    assert!(signed.verify());
    assert_eq!(signed.message(), b"hello");
    assert!(signed.verifying_key().verify(b"hello", signed.signature()));
}

#[cfg(feature = "serde")]
#[test]
fn signature_serde() {
    let key = SigningKey::random(&secp256r1(), &mut OsRng).unwrap();
    let signature = key.sign(b"serde").unwrap();

    let json = serde_json::to_string(&signature).unwrap();
    let decoded: Signature = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, signature);
    assert!(key.verifying_key().verify(b"serde", &decoded));
}
