#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! use weierstrass::{BigUint, Curve};
//!
//! // y² = x³ + 2x + 3 over 𝔽₉₇ with a generator of order 5
//! let curve = Curve::new(2u32.into(), 3u32.into(), 97u32.into())
//!     .with_order(5u32.into())
//!     .with_generator(3u32.into(), 6u32.into())?;
//!
//! let g = curve.generator()?;
//! let q = g.mul(&BigUint::from(3u32))?;
//! assert_eq!(q, curve.point(80u32.into(), 87u32.into())?);
//! assert_eq!(g.add(&g)?.add(&g)?, q);
//! assert!(q.add(&g.mul(&BigUint::from(2u32))?)?.is_identity());
//! # Ok::<(), weierstrass::Error>(())
//! ```

mod curve;
mod error;
mod field;
mod point;
mod point_arithmetic;

pub mod curves;
pub mod ecdsa;

pub use crate::{
    curve::{Curve, CurveParams},
    error::{Error, Result},
    point::{Coordinates, Point},
};
pub use num_bigint::BigUint;
pub use numtheory;
pub use rand_core;
