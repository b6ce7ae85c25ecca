//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this crate.

use async_trait::async_trait;

use crate::domain::entities::{Network, SignatureVerdict};

/// Primary signature verification API.
///
/// Implementations must be thread-safe (`Send + Sync`); concurrent calls
/// share no mutable state.
#[async_trait]
pub trait SignatureVerificationApi: Send + Sync {
    /// Verify a wallet signature for an account.
    ///
    /// Deployed accounts are asked to validate the signature themselves via
    /// a read-only contract call; undeployed accounts fall back to an
    /// off-chain STARK-curve check against `public_key`.
    ///
    /// Never returns an error: every failure mode is folded into the
    /// verdict.
    async fn verify_signature(
        &self,
        account_address: &str,
        message_hash: &str,
        signature: &[String],
        network: Network,
        public_key: Option<&str>,
    ) -> SignatureVerdict;

    /// Whether a contract is deployed at `account_address`.
    ///
    /// Lookup failures count as "not deployed"; this never errors.
    async fn is_account_deployed(&self, network: Network, account_address: &str) -> bool;
}
