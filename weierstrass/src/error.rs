//! Error type

use core::fmt::{self, Display};

/// Elliptic curve errors
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A random range had `min > max`, a private key was outside `[1, n-1]`,
    /// or a public key was the point at infinity.
    InvalidRange,

    /// Affine coordinates do not satisfy the curve equation.
    PointNotOnCurve,

    /// A modular inverse was requested for a non-invertible element.
    NotInvertible,

    /// Points bound to different curve parameters were combined.
    InconsistentCurve,

    /// The operation needs the subgroup order `n`, which the curve lacks.
    MissingOrder,

    /// The operation needs a generator point, which the curve lacks.
    MissingGenerator,

    /// Signing discarded every nonce it drew because each gave `r = 0` or
    /// `s = 0`.
    NonceExhausted,

    /// A domain parameter could not be parsed.
    Encoding,

    /// The random number generator failed.
    Entropy,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidRange => "value out of range",
            Error::PointNotOnCurve => "point is not on the curve",
            Error::NotInvertible => "element is not invertible",
            Error::InconsistentCurve => "points belong to different curves",
            Error::MissingOrder => "curve has no subgroup order",
            Error::MissingGenerator => "curve has no generator point",
            Error::NonceExhausted => "no usable signing nonce found",
            Error::Encoding => "malformed curve parameter",
            Error::Entropy => "random number generator failure",
        })
    }
}

impl std::error::Error for Error {}

impl From<numtheory::Error> for Error {
    fn from(err: numtheory::Error) -> Error {
        match err {
            numtheory::Error::InvalidRange => Error::InvalidRange,
            numtheory::Error::NotInvertible => Error::NotInvertible,
            numtheory::Error::Entropy => Error::Entropy,
        }
    }
}

/// Result type with the `weierstrass` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
