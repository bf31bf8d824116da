//! Imprint core domain types and errors.

mod error;
mod types;

pub use error::FingerprintError;
pub use types::Fingerprint;
