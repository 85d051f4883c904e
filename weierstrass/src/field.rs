//! Arithmetic modulo a prime: the base field `𝔽ₚ` and the scalar field `𝔽ₙ`.

use crate::Result;
use num_bigint::BigUint;

/// Residues modulo a prime.
///
/// Operands are expected in `[0, modulus)`; results always are.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PrimeField<'a> {
    modulus: &'a BigUint,
}

impl<'a> PrimeField<'a> {
    pub(crate) fn new(modulus: &'a BigUint) -> Self {
        Self { modulus }
    }

    pub(crate) fn reduce(&self, a: &BigUint) -> BigUint {
        a % self.modulus
    }

    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % self.modulus
    }

    pub(crate) fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + self.modulus - b % self.modulus) % self.modulus
    }

    pub(crate) fn neg(&self, a: &BigUint) -> BigUint {
        (self.modulus - a % self.modulus) % self.modulus
    }

    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * b % self.modulus
    }

    pub(crate) fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    pub(crate) fn invert(&self, a: &BigUint) -> Result<BigUint> {
        Ok(numtheory::invert(a, self.modulus)?)
    }

    /// Returns `a · b⁻¹`.
    pub(crate) fn div(&self, a: &BigUint, b: &BigUint) -> Result<BigUint> {
        Ok(self.mul(a, &self.invert(b)?))
    }
}
