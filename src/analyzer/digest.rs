//! Content identifiers
//!
//! SHA-256 over the UTF-8 bytes of the trimmed value, rendered as
//! 64 lowercase hex characters.

use sha2::{Digest, Sha256};

/// Compute the content identifier of an already-trimmed value.
///
/// This function is deterministic: the same input always produces the same output.
pub fn content_id(trimmed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(trimmed.as_bytes());
    format!("{:x}", hasher.finalize())
}
