//! Content-addressed string keys.

use sha2::{Digest, Sha256};

/// Length, in hex characters, of a [`string_key`] result.
pub const KEY_LENGTH: usize = 16;

/// Derives the dictionary key for a raw string.
///
/// The key is the SHA-256 digest of the string's UTF-8 bytes, lowercase hex,
/// truncated to [`KEY_LENGTH`] characters. It depends on nothing but the
/// content, so identical strings always map to the same key across runs and
/// machines. Collisions between distinct strings are treated as negligible at
/// this length; no detection or resolution is attempted.
pub fn string_key(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..KEY_LENGTH].to_string()
}
