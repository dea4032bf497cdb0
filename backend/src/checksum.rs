//! Dataset fingerprinting.

use sha2::{Digest, Sha256};

/// SHA-256 of the raw CSV body, as lowercase hex.
///
/// Logged at startup and reported by `/health` so two running dashboards can
/// be compared without diffing the dataset.
pub fn dataset_checksum(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    hex::encode(hasher.finalize())
}
