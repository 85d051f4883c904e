//! Curve points in affine coordinates.

use crate::{Curve, Error, Result};
use core::{fmt, ops::Neg};
use num_bigint::BigUint;

/// Affine coordinates of a point, or the point at infinity.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Coordinates {
    /// Additive identity of the group a.k.a. the point at infinity.
    Identity,

    /// Affine point `(x, y)` with `0 ≤ x, y < p`.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

/// Point on a Weierstrass curve, bound to that curve.
///
/// Points compare equal when both their coordinates and their curves do.
/// Every non-identity point satisfies the curve equation: construction
/// through [`Point::new`] checks it, and the group operations preserve it.
#[derive(Clone, Debug)]
pub struct Point {
    pub(crate) curve: Curve,
    pub(crate) coordinates: Coordinates,
}

impl Point {
    /// Create the affine point `(x, y)` on `curve`.
    ///
    /// Fails with [`Error::PointNotOnCurve`] unless `x` and `y` are reduced
    /// mod `p` and satisfy `y² = x³ + ax + b`.
    pub fn new(x: BigUint, y: BigUint, curve: &Curve) -> Result<Self> {
        if !curve.contains(&x, &y) {
            return Err(Error::PointNotOnCurve);
        }

        Ok(Self::from_affine_unchecked(curve, x, y))
    }

    /// The point at infinity of `curve`.
    pub fn identity(curve: &Curve) -> Self {
        Self {
            curve: curve.clone(),
            coordinates: Coordinates::Identity,
        }
    }

    pub(crate) fn from_affine_unchecked(curve: &Curve, x: BigUint, y: BigUint) -> Self {
        debug_assert!(curve.contains(&x, &y));

        Self {
            curve: curve.clone(),
            coordinates: Coordinates::Affine { x, y },
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self.coordinates, Coordinates::Identity)
    }

    /// x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        match &self.coordinates {
            Coordinates::Affine { x, .. } => Some(x),
            Coordinates::Identity => None,
        }
    }

    /// y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        match &self.coordinates {
            Coordinates::Affine { y, .. } => Some(y),
            Coordinates::Identity => None,
        }
    }

    /// Coordinates of this point.
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// The curve this point is bound to.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Returns `-self`: `(x, -y mod p)`, or the identity for the identity.
    pub fn neg(&self) -> Self {
        match &self.coordinates {
            Coordinates::Identity => self.clone(),
            Coordinates::Affine { x, y } => Self {
                curve: self.curve.clone(),
                coordinates: Coordinates::Affine {
                    x: x.clone(),
                    y: self.curve.field().neg(y),
                },
            },
        }
    }

    /// Fails with [`Error::InconsistentCurve`] unless both points share
    /// curve parameters.
    pub(crate) fn ensure_same_curve(&self, other: &Self) -> Result<()> {
        if self.curve == other.curve {
            Ok(())
        } else {
            Err(Error::InconsistentCurve)
        }
    }
}

impl Eq for Point {}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates && self.curve == other.curve
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::neg(&self)
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::neg(self)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            Coordinates::Identity => f.write_str("∞"),
            Coordinates::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}
