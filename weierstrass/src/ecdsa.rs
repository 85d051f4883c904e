//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Messages are digested with SHA-256 applied twice (see
//! [`numtheory::hash_to_int`]) and the digest is reduced modulo the subgroup
//! order `n`.
//!
//! ## Signing/Verification Example
//!
//! ```
//! use weierstrass::{curves::secp256r1, ecdsa::SigningKey, rand_core::OsRng};
//!
//! let curve = secp256r1();
//! let signing_key = SigningKey::random(&curve, &mut OsRng)?;
//! let message = b"an elliptic curve was used to sign this message";
//!
//! let signature = signing_key.sign(message)?;
//!
//! let verifying_key = signing_key.verifying_key();
//! assert!(verifying_key.verify(message, &signature));
//! assert!(!verifying_key.verify(b"a different message", &signature));
//! # Ok::<(), weierstrass::Error>(())
//! ```

use crate::{Curve, Error, Point, Result};
use core::fmt;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use numtheory::{hash_to_int, random_in_range};
use rand_core::{CryptoRngCore, OsRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use signature::{self, RandomizedSigner, Signer, Verifier};

/// Number of nonces [`SigningKey::sign_with_rng`] draws before giving up.
///
/// On a cryptographically sized curve a nonce is discarded with negligible
/// probability. On toy curves every nonce can be unusable: over `𝔽₉₇` with
/// `G = (3, 6)` and `n = 5`, each `r` is 3, so `d = 2` signing a message
/// with `e ≡ 4 (mod 5)` always gives `s = 0`.
pub const NONCE_ATTEMPTS: usize = 128;

/// ECDSA signature: the pair `(r, s)`.
///
/// Construction does not check that `r` and `s` lie in `[1, n-1]`;
/// verification does, and rejects signatures where they don't.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its scalar components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split into `(r, s)`.
    pub fn split_scalars(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }
}

/// ECDSA secret key: the private scalar `d` with `1 ≤ d ≤ n-1`, together
/// with its public point `Q = [d] G`.
#[derive(Clone)]
pub struct SigningKey {
    secret_scalar: BigUint,
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Create a signing key from the private scalar `d`.
    ///
    /// Fails with [`Error::InvalidRange`] unless `1 ≤ d ≤ n-1`, and with
    /// [`Error::MissingOrder`]/[`Error::MissingGenerator`] if the curve
    /// lacks either parameter.
    pub fn new(curve: &Curve, d: BigUint) -> Result<Self> {
        let n = curve.order()?;
        if d.is_zero() || &d >= n {
            return Err(Error::InvalidRange);
        }

        let point = curve.generator()?.mul(&d)?;

        Ok(Self {
            secret_scalar: d,
            verifying_key: VerifyingKey { point },
        })
    }

    /// Generate a signing key with `d` drawn uniformly from `[1, n-1]`.
    pub fn random<R>(curve: &Curve, rng: &mut R) -> Result<Self>
    where
        R: CryptoRngCore + ?Sized,
    {
        let n = curve.order()?;
        if n.is_zero() {
            return Err(Error::InvalidRange);
        }

        let d = random_in_range(rng, &BigUint::one(), &(n - 1u32))?;
        Self::new(curve, d)
    }

    /// The private scalar `d`.
    pub fn secret_scalar(&self) -> &BigUint {
        &self.secret_scalar
    }

    /// The public half of this key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// The curve this key belongs to.
    pub fn curve(&self) -> &Curve {
        self.verifying_key.curve()
    }

    /// Sign `msg` with a nonce drawn from the operating system's RNG.
    pub fn sign(&self, msg: &[u8]) -> Result<Signature> {
        self.sign_with_rng(&mut OsRng, msg)
    }

    /// Sign `msg` with a nonce drawn from `rng`.
    ///
    /// Every call draws a fresh nonce `k`. A nonce is discarded and redrawn
    /// if it yields `r = 0` or `s = 0`; after [`NONCE_ATTEMPTS`] discarded
    /// nonces signing fails with [`Error::NonceExhausted`].
    pub fn sign_with_rng<R>(&self, rng: &mut R, msg: &[u8]) -> Result<Signature>
    where
        R: CryptoRngCore + ?Sized,
    {
        let e = hash_to_int(msg);
        self.sign_prehashed(rng, &e)
    }

    /// Sign `msg` and bundle the result with the message and public key.
    pub fn sign_message(&self, msg: impl Into<Vec<u8>>) -> Result<SignedMessage> {
        let message = msg.into();
        let signature = self.sign(&message)?;

        Ok(SignedMessage {
            message,
            signature,
            verifying_key: self.verifying_key.clone(),
        })
    }

    fn sign_prehashed<R>(&self, rng: &mut R, e: &BigUint) -> Result<Signature>
    where
        R: CryptoRngCore + ?Sized,
    {
        let curve = self.curve();
        let scalars = curve.scalars()?;
        let g = curve.generator()?;
        let max = curve.order()? - 1u32;
        let e = scalars.reduce(e);

        for _ in 0..NONCE_ATTEMPTS {
            let k = random_in_range(rng, &BigUint::one(), &max)?;

            // Compute `x`-coordinate of affine point 𝑘×𝑮, reduced mod n
            let r = match g.mul(&k)?.x() {
                Some(x) => scalars.reduce(x),
                None => BigUint::zero(),
            };

            if r.is_zero() {
                tracing::debug!("nonce gave r = 0; drawing a fresh nonce");
                continue;
            }

            let k_inverse = scalars.invert(&k)?;
            let s = scalars.mul(
                &k_inverse,
                &scalars.add(&e, &scalars.mul(&self.secret_scalar, &r)),
            );

            if s.is_zero() {
                tracing::debug!("nonce gave s = 0; drawing a fresh nonce");
                continue;
            }

            return Ok(Signature { r, s });
        }

        tracing::debug!(attempts = NONCE_ATTEMPTS, "no usable nonce found");
        Err(Error::NonceExhausted)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        SigningKey::sign(self, msg).map_err(signature::Error::from_source)
    }
}

impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        SigningKey::sign_with_rng(self, rng, msg).map_err(signature::Error::from_source)
    }
}

/// ECDSA public key: the point `Q`. Holds only public data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    point: Point,
}

impl VerifyingKey {
    /// Create a verifying key from the public point `Q`.
    ///
    /// Fails with [`Error::InvalidRange`] if `Q` is the identity, and with
    /// [`Error::MissingOrder`]/[`Error::MissingGenerator`] if its curve
    /// lacks either parameter.
    pub fn from_point(point: Point) -> Result<Self> {
        point.curve().order()?;
        point.curve().generator()?;

        if point.is_identity() {
            return Err(Error::InvalidRange);
        }

        Ok(Self { point })
    }

    /// The public point `Q`.
    pub fn as_point(&self) -> &Point {
        &self.point
    }

    /// The curve this key belongs to.
    pub fn curve(&self) -> &Curve {
        self.point.curve()
    }

    /// Is `signature` a valid signature over `msg` by this key?
    ///
    /// Malformed or forged signatures return `false`; this never fails.
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> bool {
        match self.verify_prehashed(&hash_to_int(msg), signature) {
            Ok(valid) => valid,
            Err(err) => {
                tracing::debug!(%err, "signature verification aborted");
                false
            }
        }
    }

    fn verify_prehashed(&self, e: &BigUint, signature: &Signature) -> Result<bool> {
        let curve = self.curve();
        let n = curve.order()?;
        let scalars = curve.scalars()?;
        let Signature { r, s } = signature;

        if r.is_zero() || s.is_zero() || r >= n || s >= n {
            tracing::debug!("signature scalar outside [1, n-1]");
            return Ok(false);
        }

        let w = scalars.invert(s)?;
        let u1 = scalars.mul(&scalars.reduce(e), &w);
        let u2 = scalars.mul(r, &w);
        let x = curve.generator()?.mul(&u1)?.add(&self.point.mul(&u2)?)?;

        match x.x() {
            Some(x) => Ok(&scalars.reduce(x) == r),
            None => {
                tracing::debug!("u1*G + u2*Q is the point at infinity");
                Ok(false)
            }
        }
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        if VerifyingKey::verify(self, msg, signature) {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

impl TryFrom<Point> for VerifyingKey {
    type Error = Error;

    fn try_from(point: Point) -> Result<VerifyingKey> {
        VerifyingKey::from_point(point)
    }
}

impl From<VerifyingKey> for Point {
    fn from(verifying_key: VerifyingKey) -> Point {
        verifying_key.point
    }
}

/// A message together with its signature and the key that produced it, as
/// handed to a verifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedMessage {
    message: Vec<u8>,
    signature: Signature,
    verifying_key: VerifyingKey,
}

impl SignedMessage {
    /// Bundle a message with a signature and verifying key.
    pub fn new(message: Vec<u8>, signature: Signature, verifying_key: VerifyingKey) -> Self {
        Self {
            message,
            signature,
            verifying_key,
        }
    }

    /// The signed payload.
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// The signature over [`SignedMessage::message`].
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The key claimed to have produced the signature.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Check the signature against the message and key.
    pub fn verify(&self) -> bool {
        self.verifying_key.verify(&self.message, &self.signature)
    }
}
