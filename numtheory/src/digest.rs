//! Message digests as integers.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// Hash `message` with SHA-256 applied twice and read the 256-bit result
/// as a big-endian unsigned integer.
///
/// The result is not reduced: callers working in a group of order `n` reduce
/// it themselves.
pub fn hash_to_int(message: impl AsRef<[u8]>) -> BigUint {
    let digest = Sha256::digest(Sha256::digest(message.as_ref()));
    BigUint::from_bytes_be(&digest)
}
