//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Algorithm {
    /// Atkin's algorithm for `p ≡ 5 (mod 8)`.
    Atkin,

    /// Shanks algorithm for `p ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    #[default]
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    fn for_modulus(p: &BigUint) -> Self {
        if residue(p, 4) == 3 {
            Self::Shanks
        } else if residue(p, 8) == 5 {
            Self::Atkin
        } else {
            Self::TonelliShanks
        }
    }
}

/// Returns `x` with `x² ≡ n (mod p)`, or `None` if `n` is a quadratic
/// non-residue.
///
/// `p` must be an odd prime. This is not checked: with a composite modulus
/// the result is meaningless. When a root exists the other root is `p - x`;
/// which of the two is returned depends on the algorithm selected for `p`.
pub fn sqrt_mod(n: &BigUint, p: &BigUint) -> Option<BigUint> {
    let n = n % p;
    if n.is_zero() {
        return Some(n);
    }

    // Euler's criterion
    let legendre = n.modpow(&((p - 1u32) >> 1u32), p);
    if !legendre.is_one() {
        return None;
    }

    let root = match Algorithm::for_modulus(p) {
        Algorithm::Atkin => sqrt_atkin(&n, p),
        Algorithm::Shanks => sqrt_shanks(&n, p),
        Algorithm::TonelliShanks => sqrt_tonelli_shanks(&n, p),
    };

    // guards against a composite `p` slipping through
    (&root * &root % p == n).then_some(root)
}

/// Shanks algorithm for `p ≡ 3 (mod 4)`.
///
/// A single exponentiation: `n^((p + 1) / 4) (mod p)`.
fn sqrt_shanks(n: &BigUint, p: &BigUint) -> BigUint {
    n.modpow(&((p + 1u32) >> 2u32), p)
}

/// Atkin's algorithm for `p ≡ 5 (mod 8)`.
///
/// From <https://eprint.iacr.org/2012/685.pdf> (page 10, algorithm 3)
fn sqrt_atkin(n: &BigUint, p: &BigUint) -> BigUint {
    let two_n = (n << 1u32) % p;
    let v = two_n.modpow(&((p - 5u32) >> 3u32), p);
    let i = &two_n * &v % p * &v % p;

    // `i` is a square root of -1, so never equal to 1
    let i_minus_one = (i + p - 1u32) % p;
    n * &v % p * i_minus_one % p
}

/// Tonelli-Shanks algorithm works for every odd prime.
///
/// From <https://en.wikipedia.org/wiki/Tonelli%E2%80%93Shanks_algorithm>
fn sqrt_tonelli_shanks(n: &BigUint, p: &BigUint) -> BigUint {
    let p_minus_one = p - 1u32;
    let s = p_minus_one.trailing_zeros().unwrap_or(0);
    let q = &p_minus_one >> s;

    // smallest quadratic non-residue; one exists below 2·ln²(p) under GRH
    let exponent = &p_minus_one >> 1u32;
    let mut z = BigUint::from(2u32);
    while z < *p && z.modpow(&exponent, p) != p_minus_one {
        z += 1u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = n.modpow(&q, p);
    let mut r = n.modpow(&((&q + 1u32) >> 1u32), p);

    while !t.is_one() {
        // least `i` in `(0, m)` with `t^(2^i) = 1`
        let mut i = 0;
        let mut t2i = t.clone();
        while !t2i.is_one() && i < m {
            t2i = &t2i * &t2i % p;
            i += 1;
        }
        if i == m {
            break;
        }

        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = &b * &b % p;
        }

        m = i;
        c = &b * &b % p;
        t = t * &c % p;
        r = r * b % p;
    }

    r
}

/// Compute residue classes of the modulus for selecting particular square root algorithms.
fn residue(p: &BigUint, n: u32) -> u32 {
    (p % n).to_u32().unwrap_or_default()
}
