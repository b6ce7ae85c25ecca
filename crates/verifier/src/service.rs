//! # Signature Verification Service
//!
//! The verification state machine: probe deployment, then either ask the
//! account contract to validate the signature (two entrypoint dialects,
//! one retry) or run the off-chain STARK-curve check.
//!
//! All outcomes are normalized into a [`SignatureVerdict`]; no error
//! escapes [`SignatureVerificationApi::verify_signature`].

use async_trait::async_trait;
use starknet_crypto::Felt;
use tracing::{debug, warn};

use crate::domain::entities::{Network, SignatureVerdict};
use crate::domain::errors::VerifyError;
use crate::domain::stark;
use crate::ports::inbound::SignatureVerificationApi;
use crate::ports::outbound::{ProviderError, StarknetProvider};

/// Camel-case validation entrypoint exposed by older account classes.
const ENTRYPOINT_CAMEL: &str = "isValidSignature";

/// Snake-case validation entrypoint exposed by current account classes.
const ENTRYPOINT_SNAKE: &str = "is_valid_signature";

/// ASCII "VALID": returned instead of a boolean by some account classes.
const VALID_MAGIC: Felt = Felt::from_hex_unchecked("0x56414c4944");

/// Signature verification service.
///
/// Holds only the injected provider; each call is self-contained, so any
/// number of verifications may run concurrently over one instance.
pub struct SignatureVerificationService<P> {
    provider: P,
}

impl<P: StarknetProvider> SignatureVerificationService<P> {
    /// Create a new service over the given node gateway.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Deployment probe: a non-empty class hash bound to the address means
    /// the account contract exists on-chain. Lookup failures downgrade to
    /// "not deployed" since the caller has an off-chain fallback.
    async fn probe_deployment(&self, network: Network, account_address: &str) -> bool {
        match self.provider.class_hash_at(network, account_address).await {
            Ok(Some(class_hash)) => !class_hash.is_empty(),
            Ok(None) => false,
            Err(e) => {
                debug!(
                    account = %account_address,
                    network = %network,
                    error = %e,
                    "class hash lookup failed, treating account as undeployed"
                );
                false
            }
        }
    }

    /// Ask the account contract to validate the signature.
    ///
    /// Calldata layout is the fixed ABI all target account classes honor:
    /// message hash, signature length, then each signature word. The
    /// camel-case entrypoint is attempted first; if that call fails for any
    /// reason the snake-case spelling is tried exactly once, with its wider
    /// set of success words. There is no further retry.
    async fn verify_on_chain(
        &self,
        network: Network,
        account_address: &str,
        message_hash: &str,
        signature: &[String],
    ) -> Result<SignatureVerdict, ProviderError> {
        let mut calldata = Vec::with_capacity(signature.len() + 2);
        calldata.push(message_hash.to_string());
        calldata.push(format!("{:#x}", signature.len()));
        calldata.extend(signature.iter().cloned());

        match self
            .provider
            .call(network, account_address, ENTRYPOINT_CAMEL, &calldata)
            .await
        {
            Ok(result) => Ok(verdict_from_result(&result, accepts_camel)),
            Err(first_failure) => {
                debug!(
                    account = %account_address,
                    error = %first_failure,
                    "camel-case entrypoint failed, retrying snake-case"
                );
                let result = self
                    .provider
                    .call(network, account_address, ENTRYPOINT_SNAKE, &calldata)
                    .await?;
                Ok(verdict_from_result(&result, accepts_snake))
            }
        }
    }
}

#[async_trait]
impl<P: StarknetProvider> SignatureVerificationApi for SignatureVerificationService<P> {
    async fn verify_signature(
        &self,
        account_address: &str,
        message_hash: &str,
        signature: &[String],
        network: Network,
        public_key: Option<&str>,
    ) -> SignatureVerdict {
        if self.probe_deployment(network, account_address).await {
            debug!(account = %account_address, network = %network, "verifying on-chain");
            match self
                .verify_on_chain(network, account_address, message_hash, signature)
                .await
            {
                Ok(verdict) => verdict,
                Err(e) => {
                    warn!(
                        account = %account_address,
                        network = %network,
                        error = %e,
                        "on-chain signature verification failed"
                    );
                    SignatureVerdict::invalid(VerifyError::Provider(e.to_string()))
                }
            }
        } else {
            debug!(account = %account_address, network = %network, "verifying locally");
            let Some(key) = public_key else {
                return SignatureVerdict::invalid(VerifyError::MissingPublicKey);
            };
            if stark::verify_local(key, message_hash, signature) {
                SignatureVerdict::valid()
            } else {
                SignatureVerdict::invalid(VerifyError::LocalVerificationFailed)
            }
        }
    }

    async fn is_account_deployed(&self, network: Network, account_address: &str) -> bool {
        self.probe_deployment(network, account_address).await
    }
}

// =============================================================================
// RESULT-WORD INTERPRETATION
// =============================================================================

/// Camel-case dialect: only a literal one means valid.
fn accepts_camel(word: &Felt) -> bool {
    *word == Felt::ONE
}

/// Snake-case dialect: one, zero, or the "VALID" magic word. The zero case
/// is deliberate; account classes in the wild rely on it.
fn accepts_snake(word: &Felt) -> bool {
    *word == Felt::ONE || *word == Felt::ZERO || *word == VALID_MAGIC
}

/// Fold a call's result words into a verdict. Words are compared as field
/// elements so `0x1` and `0x01` spellings agree. A word outside the
/// accepted set is a plain negative with no error text; only off-chain
/// rejections carry explanatory messages.
fn verdict_from_result(result: &[String], accepts: fn(&Felt) -> bool) -> SignatureVerdict {
    let Some(word) = result.first() else {
        return SignatureVerdict::invalid(VerifyError::EmptyCallResult);
    };
    let accepted = Felt::from_hex(word).map(|felt| accepts(&felt)).unwrap_or(false);
    if accepted {
        SignatureVerdict::valid()
    } else {
        SignatureVerdict {
            valid: false,
            error: None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
