//! Content fingerprinting via SHA-256.
//!
//! The fingerprint is the record identifier: two creations of byte-identical
//! values always mint the same identifier, which is what makes create-if-absent
//! deduplication work without a secondary index.

use sha2::{Digest, Sha256};

/// Length of a rendered fingerprint in hex characters.
pub const FINGERPRINT_LEN: usize = 64;

/// Compute the content fingerprint of a value.
///
/// SHA-256 over the exact bytes, rendered as lowercase hex. Total: defined
/// for every string including the empty string.
pub fn compute(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
