use sha2::{Digest, Sha256};

/// Hex SHA-256 of an RGBA frame.
///
/// Used by determinism tests: two renders of the same state must produce the
/// same digest, and a state change must change it.
pub fn frame_sha256(frame: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(frame);
    hex::encode(hasher.finalize())
}
