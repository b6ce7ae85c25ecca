//! # Verification Errors
//!
//! Error types attached to negative verification verdicts.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A network name outside the recognized set.
///
/// Unrecognized networks fail fast at the parsing boundary rather than
/// silently defaulting to one of the known chains.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognized network: {0}")]
pub struct UnknownNetwork(pub String);

/// Why a signature was not accepted.
///
/// The `Display` text is the user-facing message carried in the verdict;
/// callers surface it verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// Undeployed account and no raw public key was supplied, so the
    /// off-chain check is mathematically impossible.
    #[error("Public key is required for local verification")]
    MissingPublicKey,

    /// The off-chain STARK-curve check rejected the signature.
    #[error("Local verification failed")]
    LocalVerificationFailed,

    /// The account contract answered the validation call with no result
    /// words. An on-chain rejection word, by contrast, carries no error
    /// text at all; only the malformed response does.
    #[error("Invalid signature: received empty result")]
    EmptyCallResult,

    /// Both entrypoint dialects failed to execute; carries the upstream
    /// provider message.
    #[error("{0}")]
    Provider(String),
}

// Verdicts serialize the error as its human-readable message, not as an
// enum tag, so the JSON shape matches what dashboards display.
impl Serialize for VerifyError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
