//! Uniform sampling of big integers.

use crate::{Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

/// Sample an integer uniformly from the inclusive range `[min, max]`.
///
/// Draws `⌈bits(max - min) / 8⌉` bytes from `rng`, masks them down to the
/// smallest all-ones value covering the range, and rejects any draw that
/// exceeds `max - min`. Each draw is accepted with probability greater than
/// one half, and the accepted values are exactly uniform: there is no
/// reduction step that could introduce modulo bias.
///
/// Returns [`Error::InvalidRange`] if `min > max` and [`Error::Entropy`] if
/// the RNG fails.
pub fn random_in_range<R>(rng: &mut R, min: &BigUint, max: &BigUint) -> Result<BigUint>
where
    R: CryptoRngCore + ?Sized,
{
    if min > max {
        return Err(Error::InvalidRange);
    }

    let range = max - min;
    if range.is_zero() {
        return Ok(min.clone());
    }

    let bits = range.bits();
    let mask = (BigUint::one() << bits) - 1u32;
    let mut bytes = vec![0u8; bits.div_ceil(8) as usize];

    loop {
        rng.try_fill_bytes(&mut bytes).map_err(|_| Error::Entropy)?;
        let candidate = BigUint::from_bytes_le(&bytes) & &mask;

        if candidate <= range {
            return Ok(candidate + min);
        }
    }
}
