#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod digest;
mod error;
mod inverse;
mod prime;
mod random;
mod sqrt;

pub use crate::{
    digest::hash_to_int,
    error::{Error, Result},
    inverse::{crt, invert},
    prime::{DEFAULT_ROUNDS, is_probable_prime},
    random::random_in_range,
    sqrt::sqrt_mod,
};
pub use num_bigint::{self, BigInt, BigUint};
pub use num_integer::Integer;
pub use rand_core;
