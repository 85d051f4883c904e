//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A random range was requested with `min > max`.
    InvalidRange,

    /// The element has no inverse under the given modulus.
    NotInvertible,

    /// The random number generator failed to produce bytes.
    Entropy,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange => f.write_str("random range minimum exceeds maximum"),
            Error::NotInvertible => f.write_str("element is not invertible under the modulus"),
            Error::Entropy => f.write_str("random number generator failure"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
