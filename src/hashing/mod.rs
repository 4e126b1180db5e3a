//! Content hashing for classified artifacts.

use sha2::{Digest, Sha256};

/// Computes the SHA-256 digest of the given data and returns it as a lower-case hex string.
pub fn sha256_digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
