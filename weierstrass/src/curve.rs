//! Curve domain parameters.

use crate::{Error, Point, Result, field::PrimeField};
use core::fmt;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use numtheory::{is_probable_prime, random_in_range, sqrt_mod};
use rand_core::CryptoRngCore;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Domain parameters of a short Weierstrass curve `y² = x³ + ax + b` over
/// the prime field `𝔽ₚ`.
///
/// This is a plain value type meant to be loaded from configuration. The
/// non-singularity condition `4a³ + 27b² ≠ 0` and the primality of `p` and
/// `n` are assumed, not checked; see [`Curve::is_nonsingular`] and
/// [`Curve::verify_primes`] to check them on demand.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveParams {
    /// Coefficient `a` in the curve equation.
    pub a: BigUint,

    /// Coefficient `b` in the curve equation.
    pub b: BigUint,

    /// Field prime.
    pub p: BigUint,

    /// Order of the subgroup generated by `generator`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub n: Option<BigUint>,

    /// Generator point's affine coordinates: (x, y).
    #[cfg_attr(feature = "serde", serde(default))]
    pub generator: Option<(BigUint, BigUint)>,
}

impl CurveParams {
    /// Parse a complete set of domain parameters from hexadecimal strings.
    ///
    /// Each string may carry a `0x` prefix and embedded whitespace.
    pub fn from_hex(a: &str, b: &str, p: &str, n: &str, gx: &str, gy: &str) -> Result<Self> {
        Ok(Self {
            a: parse_hex(a)?,
            b: parse_hex(b)?,
            p: parse_hex(p)?,
            n: Some(parse_hex(n)?),
            generator: Some((parse_hex(gx)?, parse_hex(gy)?)),
        })
    }
}

fn parse_hex(s: &str) -> Result<BigUint> {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits.as_str());

    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or(Error::Encoding)
}

/// A short Weierstrass curve which points can be bound to.
///
/// Cloning is cheap: the parameters are shared and never mutated. Two curves
/// are equal when `a`, `b`, `p` and `n` agree.
#[derive(Clone, Debug)]
pub struct Curve {
    params: Arc<CurveParams>,
}

impl Curve {
    /// Curve `y² = x³ + ax + b` over `𝔽ₚ` with no subgroup order or generator.
    pub fn new(a: BigUint, b: BigUint, p: BigUint) -> Self {
        Self::from_params_unchecked(CurveParams {
            a,
            b,
            p,
            n: None,
            generator: None,
        })
    }

    /// Build a curve from domain parameters, checking that the generator (if
    /// any) lies on the curve.
    pub fn from_params(params: CurveParams) -> Result<Self> {
        let curve = Self::from_params_unchecked(CurveParams {
            generator: None,
            ..params.clone()
        });

        match params.generator {
            Some((x, y)) => curve.with_generator(x, y),
            None => Ok(curve),
        }
    }

    pub(crate) fn from_params_unchecked(params: CurveParams) -> Self {
        Self {
            params: Arc::new(params),
        }
    }

    /// Returns a copy of this curve with the subgroup order set to `n`.
    pub fn with_order(&self, n: BigUint) -> Self {
        Self::from_params_unchecked(CurveParams {
            n: Some(n),
            ..self.params().clone()
        })
    }

    /// Returns a copy of this curve with the generator set to `(x, y)`.
    ///
    /// Fails with [`Error::PointNotOnCurve`] if `(x, y)` is not a point of
    /// this curve.
    pub fn with_generator(&self, x: BigUint, y: BigUint) -> Result<Self> {
        if !self.contains(&x, &y) {
            return Err(Error::PointNotOnCurve);
        }

        Ok(Self::from_params_unchecked(CurveParams {
            generator: Some((x, y)),
            ..self.params().clone()
        }))
    }

    /// Domain parameters of this curve.
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.params.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.params.b
    }

    /// Field prime `p`.
    pub fn p(&self) -> &BigUint {
        &self.params.p
    }

    /// Subgroup order `n`.
    pub fn order(&self) -> Result<&BigUint> {
        self.params.n.as_ref().ok_or(Error::MissingOrder)
    }

    /// Generator point `G`.
    pub fn generator(&self) -> Result<Point> {
        let (x, y) = self.params.generator.as_ref().ok_or(Error::MissingGenerator)?;
        Ok(Point::from_affine_unchecked(self, x.clone(), y.clone()))
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(&self) -> Point {
        Point::identity(self)
    }

    /// Point `(x, y)` on this curve.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        Point::new(x, y, self)
    }

    /// Do the canonical coordinates `(x, y)` satisfy the curve equation?
    pub fn contains(&self, x: &BigUint, y: &BigUint) -> bool {
        let p = self.p();
        x < p && y < p && self.field().square(y) == self.equation_rhs(x)
    }

    /// Is the discriminant `4a³ + 27b²` nonzero mod `p`?
    pub fn is_nonsingular(&self) -> bool {
        let f = self.field();
        let a = f.reduce(self.a());
        let b = f.reduce(self.b());
        let a3 = f.mul(&f.square(&a), &a);
        let b2 = f.square(&b);
        let discriminant = f.add(
            &f.mul(&BigUint::from(4u32), &a3),
            &f.mul(&BigUint::from(27u32), &b2),
        );

        !discriminant.is_zero()
    }

    /// Test `p` and, when present, `n` for primality with Miller-Rabin.
    pub fn verify_primes<R>(&self, rng: &mut R, rounds: usize) -> Result<bool>
    where
        R: CryptoRngCore + ?Sized,
    {
        if !is_probable_prime(rng, self.p(), rounds)? {
            return Ok(false);
        }

        match &self.params.n {
            Some(n) => Ok(is_probable_prime(rng, n, rounds)?),
            None => Ok(true),
        }
    }

    /// Find a random point on the curve.
    ///
    /// Draws `x` from `[1, p-1]` until `x³ + ax + b` is a square in `𝔽ₚ`,
    /// then picks one of its two roots as `y` at random. The result is not
    /// necessarily in the subgroup generated by `G`.
    ///
    /// `p` must be an odd prime; `p < 3` fails with [`Error::InvalidRange`].
    pub fn random_point<R>(&self, rng: &mut R) -> Result<Point>
    where
        R: CryptoRngCore + ?Sized,
    {
        if self.p() < &BigUint::from(3u32) {
            return Err(Error::InvalidRange);
        }

        let max = self.p() - 1u32;
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let x = random_in_range(rng, &BigUint::one(), &max)?;

            if let Some(y) = sqrt_mod(&self.equation_rhs(&x), self.p()) {
                tracing::trace!(attempts, "found random curve point");

                let y = if random_in_range(rng, &BigUint::zero(), &BigUint::one())?.is_one() {
                    self.field().neg(&y)
                } else {
                    y
                };

                return Ok(Point::from_affine_unchecked(self, x, y));
            }
        }
    }

    /// Draw a random point and return it along with its order if that order
    /// is prime, for use as a generator and subgroup order.
    ///
    /// The order is found by stepping through the multiples of the point, so
    /// this is only practical on small curves. Returns `None` when the order
    /// is composite or exceeds the Hasse bound `p + 1 + 2√p`, which only
    /// happens when `p` is not prime.
    pub fn find_prime_order_point<R>(
        &self,
        rng: &mut R,
        rounds: usize,
    ) -> Result<Option<(Point, BigUint)>>
    where
        R: CryptoRngCore + ?Sized,
    {
        let point = self.random_point(rng)?;
        let hasse_bound = self.p() + 1u32 + (self.p().sqrt() << 1u32);

        let mut multiple = point.clone();
        let mut order = BigUint::one();

        while !multiple.is_identity() {
            if order > hasse_bound {
                return Ok(None);
            }

            multiple = multiple.add(&point)?;
            order += 1u32;
        }

        if is_probable_prime(rng, &order, rounds)? {
            Ok(Some((point, order)))
        } else {
            tracing::trace!(%order, "random point has composite order");
            Ok(None)
        }
    }

    /// Computes `x³ + ax + b mod p`.
    pub(crate) fn equation_rhs(&self, x: &BigUint) -> BigUint {
        let f = self.field();
        let x3 = f.mul(&f.square(x), x);
        f.add(&f.add(&x3, &f.mul(self.a(), x)), &f.reduce(self.b()))
    }

    /// Arithmetic in the base field `𝔽ₚ`.
    pub(crate) fn field(&self) -> PrimeField<'_> {
        PrimeField::new(self.p())
    }

    /// Arithmetic in the scalar field `𝔽ₙ`.
    pub(crate) fn scalars(&self) -> Result<PrimeField<'_>> {
        Ok(PrimeField::new(self.order()?))
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.params, &other.params)
            || (self.params.a == other.params.a
                && self.params.b == other.params.b
                && self.params.p == other.params.p
                && self.params.n == other.params.n)
    }
}

impl Eq for Curve {}

impl From<&Curve> for CurveParams {
    fn from(curve: &Curve) -> CurveParams {
        curve.params().clone()
    }
}

impl TryFrom<CurveParams> for Curve {
    type Error = Error;

    fn try_from(params: CurveParams) -> Result<Curve> {
        Curve::from_params(params)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Curve: y^2 = x^3 + ax + b")?;
        writeln!(f, "p: {:#x}", self.p())?;
        writeln!(f, "a: {:#x}", self.a())?;
        write!(f, "b: {:#x}", self.b())?;

        if let Some(n) = &self.params.n {
            write!(f, "\nn: {n:#x}")?;
        }

        if let Some((x, y)) = &self.params.generator {
            write!(f, "\nG: ({x:#x}, {y:#x})")?;
        }

        Ok(())
    }
}
