use imprint_core::{Fingerprint, FingerprintError};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Compute the SHA-256 fingerprint of a file's full contents.
///
/// The whole file is read into memory and hashed in one pass. Either a
/// complete fingerprint is returned or an error; there is no partial result.
pub fn compute_fingerprint(path: &Path) -> Result<Fingerprint, FingerprintError> {
    let data = fs::read(path).map_err(|e| FingerprintError::from_io(path, e))?;
    Ok(fingerprint_bytes(&data))
}

/// Compute the SHA-256 fingerprint of an in-memory byte slice.
pub fn fingerprint_bytes(data: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Fingerprint::from_bytes(hasher.finalize().into())
}

/// Recompute a file's fingerprint and compare it against an expected value.
pub fn verify(path: &Path, expected: &Fingerprint) -> Result<bool, FingerprintError> {
    Ok(compute_fingerprint(path)? == *expected)
}
