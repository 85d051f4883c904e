//! Point arithmetic: the chord-and-tangent group law and scalar
//! multiplication.
//!
//! Addition and doubling share one case analysis so that the identity and
//! the `P + (-P)` pair are resolved before either slope formula would divide
//! by zero.

use crate::{Point, Result, point::Coordinates};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

impl Point {
    /// Returns `self + other`.
    ///
    /// Fails with [`Error::InconsistentCurve`](crate::Error::InconsistentCurve)
    /// if the points are bound to different curves, and with
    /// [`Error::NotInvertible`](crate::Error::NotInvertible) if a slope
    /// denominator has no inverse, which only happens when `p` is not prime.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_curve(other)?;

        match (&self.coordinates, &other.coordinates) {
            // 𝒪 + Q = Q, P + 𝒪 = P
            (Coordinates::Identity, _) => Ok(other.clone()),
            (_, Coordinates::Identity) => Ok(self.clone()),

            // Q = -P
            (Coordinates::Affine { x: x1, y: y1 }, Coordinates::Affine { x: x2, y: y2 })
                if x1 == x2 && y1 != y2 =>
            {
                Ok(self.curve.identity())
            }

            // chord through two distinct points
            (Coordinates::Affine { x: x1, y: y1 }, Coordinates::Affine { x: x2, y: y2 })
                if x1 != x2 =>
            {
                let f = self.curve.field();
                let lambda = f.div(&f.sub(y2, y1), &f.sub(x2, x1))?;
                Ok(self.from_slope(&lambda, x1, y1, x2))
            }

            // P = Q
            _ => self.double(),
        }
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.neg())
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Result<Self> {
        match &self.coordinates {
            Coordinates::Identity => Ok(self.clone()),

            // tangent is vertical: point of order two
            Coordinates::Affine { y, .. } if y.is_zero() => Ok(self.curve.identity()),

            Coordinates::Affine { x, y } => {
                let f = self.curve.field();
                let numerator = f.add(
                    &f.mul(&BigUint::from(3u32), &f.square(x)),
                    &f.reduce(self.curve.a()),
                );
                let lambda = f.div(&numerator, &f.add(y, y))?;
                Ok(self.from_slope(&lambda, x, y, x))
            }
        }
    }

    /// Returns `[k] self`, computed by double-and-add over the bits of `k`
    /// from least to most significant. `[0] P` is the identity.
    pub fn mul(&self, k: &BigUint) -> Result<Self> {
        let mut result = self.curve.identity();
        let mut current = self.clone();
        let mut k = k.clone();

        while !k.is_zero() {
            if k.is_odd() {
                result = result.add(&current)?;
            }

            k >>= 1u32;
            if !k.is_zero() {
                current = current.double()?;
            }
        }

        Ok(result)
    }

    /// Returns `[k⁻¹ mod n] self`, the point `Q` with `[k] Q = self` when
    /// `self` lies in the subgroup of order `n`.
    ///
    /// Fails with [`Error::MissingOrder`](crate::Error::MissingOrder) if the
    /// curve has no subgroup order, and with
    /// [`Error::NotInvertible`](crate::Error::NotInvertible) if `k ≡ 0`.
    pub fn div(&self, k: &BigUint) -> Result<Self> {
        let k_inverse = self.curve.scalars()?.invert(k)?;
        self.mul(&k_inverse)
    }

    /// Third intersection of the line with slope `lambda` through
    /// `(x1, y1)` and `(x2, ·)`, reflected over the x-axis.
    fn from_slope(&self, lambda: &BigUint, x1: &BigUint, y1: &BigUint, x2: &BigUint) -> Self {
        let f = self.curve.field();
        let x3 = f.sub(&f.sub(&f.square(lambda), x1), x2);
        let y3 = f.sub(&f.mul(lambda, &f.sub(x1, &x3)), y1);
        Point::from_affine_unchecked(&self.curve, x3, y3)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Curve, Error, Point};
    use num_bigint::BigUint;

    fn uint(n: u32) -> BigUint {
        BigUint::from(n)
    }

    /// `y² = x³ + 2x + 3` over `𝔽₉₇`, which has 100 points.
    fn curve97() -> Curve {
        Curve::new(uint(2), uint(3), uint(97))
    }

    fn point(x: u32, y: u32) -> Point {
        Point::new(uint(x), uint(y), &curve97()).unwrap()
    }

    #[test]
    fn identity_is_neutral() {
        let p = point(3, 6);
        let identity = curve97().identity();
        assert_eq!(p.add(&identity).unwrap(), p);
        assert_eq!(identity.add(&p).unwrap(), p);
        assert_eq!(identity.add(&identity).unwrap(), identity);
    }

    #[test]
    fn inverse_sums_to_identity() {
        let p = point(3, 6);
        assert!(p.add(&-&p).unwrap().is_identity());
        assert!(p.sub(&p).unwrap().is_identity());
    }

    #[test]
    fn chord() {
        assert_eq!(point(3, 6).add(&point(80, 10)).unwrap(), point(80, 87));
    }

    #[test]
    fn tangent() {
        let p = point(3, 6);
        assert_eq!(p.add(&p).unwrap(), point(80, 10));
        assert_eq!(p.double().unwrap(), point(80, 10));
    }

    #[test]
    fn order_two_point_doubles_to_identity() {
        // x³ + 2x + 3 has a root in 𝔽₉₇, giving points (x, 0)
        let curve = curve97();
        let x = (0..97u32)
            .find(|&x| curve.equation_rhs(&uint(x)) == uint(0))
            .unwrap();
        let p = Point::new(uint(x), uint(0), &curve).unwrap();

        assert!(p.double().unwrap().is_identity());
        assert!(p.add(&p).unwrap().is_identity());
        assert_eq!(-&p, p);
    }

    #[test]
    fn scalar_multiplication() {
        let g = point(3, 6);
        assert!(g.mul(&uint(0)).unwrap().is_identity());
        assert_eq!(g.mul(&uint(1)).unwrap(), g);
        assert_eq!(g.mul(&uint(2)).unwrap(), point(80, 10));
        assert_eq!(g.mul(&uint(3)).unwrap(), point(80, 87));
        assert_eq!(g.mul(&uint(4)).unwrap(), point(3, 91));
        assert!(g.mul(&uint(5)).unwrap().is_identity());
        assert_eq!(g.mul(&uint(6)).unwrap(), g);
    }

    #[test]
    fn whole_group_has_order_100() {
        let curve = curve97();
        for _ in 0..20 {
            let p = curve.random_point(&mut rand_core::OsRng).unwrap();
            assert!(p.mul(&uint(100)).unwrap().is_identity());
        }
    }

    #[test]
    fn division() {
        let curve = curve97().with_order(uint(5));
        let g = Point::new(uint(3), uint(6), &curve).unwrap();
        let q = g.mul(&uint(3)).unwrap();

        assert_eq!(q.div(&uint(3)).unwrap(), g);
        assert_eq!(g.div(&uint(5)).unwrap_err(), Error::NotInvertible);
        assert_eq!(point(3, 6).div(&uint(3)).unwrap_err(), Error::MissingOrder);
    }

    #[test]
    fn different_curves() {
        let other = Curve::new(uint(2), uint(3), uint(97)).with_order(uint(5));
        let q = Point::new(uint(3), uint(6), &other).unwrap();
        assert_eq!(point(3, 6).add(&q).unwrap_err(), Error::InconsistentCurve);
    }

    #[test]
    fn composite_modulus_surfaces_non_invertible() {
        // 𝔽₉₁ is not a field: 91 = 7·13
        let curve = Curve::new(uint(1), uint(0), uint(91));
        let find = |x: u32| {
            (0..91u32)
                .find(|&y| curve.contains(&uint(x), &uint(y)))
                .map(|y| Point::new(uint(x), uint(y), &curve).unwrap())
        };

        // two points whose x-coordinates differ by a multiple of 7
        let (p, q) = (0..91u32)
            .filter_map(|x| find(x).zip(find((x + 7) % 91)))
            .find(|(p, q)| p.x() != q.x())
            .unwrap();

        assert_eq!(p.add(&q).unwrap_err(), Error::NotInvertible);
    }
}
