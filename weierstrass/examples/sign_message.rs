//! Sign and verify a message with a fresh secp256r1 key.
//!
//! Run with `RUST_LOG=weierstrass=debug` to see nonce redraws and
//! verification failures.

use rand_core::OsRng;
use tracing_subscriber::EnvFilter;
use weierstrass::{curves::secp256r1, ecdsa::SigningKey};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let curve = secp256r1();
    println!("Elliptic Curve Digital Signature Algorithm Example");
    println!("{curve}\n");

    let signing_key = SigningKey::random(&curve, &mut OsRng)?;
    println!("Private Key: {}\n", signing_key.secret_scalar());

    let message = "an elliptic curve was used to sign this message";
    let signed = signing_key.sign_message(message)?;

    let q = signed.verifying_key().as_point();
    println!("Public Key: {q}\n");

    let signature = signed.signature();
    println!("Digital Signature");
    println!("message: {message}");
    println!("r: {}", signature.r());
    println!("s: {}\n", signature.s());

    println!("Verifiable: {}", signed.verify());

    Ok(())
}
