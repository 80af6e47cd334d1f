//! Content-hash primitive used for record keying and lookup.

use sha2::{Digest, Sha256};

/// SHA-256 digest of a string, rendered as 64 lowercase hex characters.
///
/// The input is hashed as its UTF-8 bytes, so the result is stable across
/// platforms. Deterministic and infallible.
pub fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    hex::encode(digest)
}
