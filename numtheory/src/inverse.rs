//! Modular inversion and the Chinese remainder theorem.

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Compute `a⁻¹ mod modulus` using the extended Euclidean algorithm.
///
/// Works for any modulus, prime or not. Returns [`Error::NotInvertible`]
/// when `gcd(a, modulus) ≠ 1`, which includes `a ≡ 0` and a zero modulus.
pub fn invert(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::NotInvertible);
    }

    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let a = BigInt::from_biguint(Sign::Plus, a % modulus);
    let egcd = a.extended_gcd(&m);

    if !egcd.gcd.is_one() {
        return Err(Error::NotInvertible);
    }

    // Bezout coefficient may be negative; `mod_floor` maps it into `[0, m)`
    egcd.x.mod_floor(&m).to_biguint().ok_or(Error::NotInvertible)
}

/// Solve a system of congruences `x ≡ rᵢ (mod mᵢ)` for pairwise coprime
/// moduli, returning the unique solution in `[0, ∏ mᵢ)`.
///
/// An empty system has the solution `0`. Moduli sharing a factor surface as
/// [`Error::NotInvertible`].
pub fn crt(congruences: &[(BigUint, BigUint)]) -> Result<BigUint> {
    let product = congruences
        .iter()
        .fold(BigUint::one(), |acc, (_, modulus)| acc * modulus);

    let mut sum = BigUint::zero();
    for (residue, modulus) in congruences {
        let partial = &product / modulus;
        let coefficient = invert(&partial, modulus)?;
        sum = (sum + residue * &partial % &product * coefficient) % &product;
    }

    Ok(sum)
}
