//! SHA-256 checksum of generated output.

use sha2::{Digest, Sha256};

/// Compute SHA256 checksum of a byte slice
pub fn compute_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    format!("{:x}", result)
}
