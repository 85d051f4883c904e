//! Miller-Rabin probabilistic primality testing.

use crate::{Result, random_in_range};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use rand_core::CryptoRngCore;

/// Number of Miller-Rabin rounds giving a false positive rate of at most
/// `4⁻⁸` for any composite.
pub const DEFAULT_ROUNDS: usize = 8;

/// Miller-Rabin primality test.
///
/// `0`, `1` and even numbers other than `2` are rejected and `2` and `3`
/// accepted without consulting `rng`. Any other candidate is put through
/// `rounds` trials, each with a witness drawn uniformly from
/// `[2, candidate - 2]`; the first witness proving compositeness returns
/// `false`.
///
/// A `true` result is wrong with probability at most `4^-rounds`. A `false`
/// result is always correct.
pub fn is_probable_prime<R>(rng: &mut R, candidate: &BigUint, rounds: usize) -> Result<bool>
where
    R: CryptoRngCore + ?Sized,
{
    match candidate.to_u8() {
        Some(0 | 1) => return Ok(false),
        Some(2 | 3) => return Ok(true),
        _ if candidate.is_even() => return Ok(false),
        _ => {}
    }

    let n_minus_one = candidate - 1u32;
    // `candidate` is odd and > 3, so `n - 1` is even and nonzero
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    let two = BigUint::from(2u32);
    let max_witness = candidate - 2u32;

    'witness: for _ in 0..rounds {
        let a = random_in_range(rng, &two, &max_witness)?;
        let mut x = a.modpow(&d, candidate);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = &x * &x % candidate;
            if x == n_minus_one {
                continue 'witness;
            }
        }

        return Ok(false);
    }

    Ok(true)
}
