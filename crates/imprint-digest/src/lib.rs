//! SHA-256 fingerprint generation for file content.
//!
//! Given a filesystem path, reads the file's full byte content and produces
//! its [`Fingerprint`], conventionally rendered as 64 lowercase hex
//! characters. Identical bytes always produce the identical fingerprint.

mod hash;

pub use hash::{compute_fingerprint, fingerprint_bytes, verify};
pub use imprint_core::{Fingerprint, FingerprintError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_fingerprint_matches_byte_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.jpg");
        fs::write(&path, b"\xff\xd8\xff\xe0 fake jpeg body").unwrap();

        let from_file = compute_fingerprint(&path).unwrap();
        let from_bytes = fingerprint_bytes(b"\xff\xd8\xff\xe0 fake jpeg body");
        assert_eq!(from_file, from_bytes);
    }

    #[test]
    fn file_fingerprint_is_repeatable_for_unchanged_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"stable content").unwrap();

        let first = compute_fingerprint(&path).unwrap();
        let second = compute_fingerprint(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn file_fingerprint_changes_when_content_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");

        fs::write(&path, b"version one").unwrap();
        let before = compute_fingerprint(&path).unwrap();

        fs::write(&path, b"version two").unwrap();
        let after = compute_fingerprint(&path).unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.bin");

        let err = compute_fingerprint(&path).unwrap_err();
        assert!(matches!(err, FingerprintError::NotFound { .. }));
    }

    #[test]
    fn verify_accepts_matching_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, b"signed content").unwrap();

        let expected = fingerprint_bytes(b"signed content");
        assert!(verify(&path, &expected).unwrap());
    }

    #[test]
    fn verify_rejects_stale_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, b"original").unwrap();
        let stale = compute_fingerprint(&path).unwrap();

        fs::write(&path, b"tampered").unwrap();
        assert!(!verify(&path, &stale).unwrap());
    }
}
