//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define the network capabilities this crate needs.
//! Injected at construction so tests can substitute deterministic doubles
//! without patching shared state.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::Network;

/// Error from the underlying Starknet node.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No contract exists at the queried address.
    #[error("Contract not found: {0}")]
    ContractNotFound(String),

    /// The node executed the request and answered with a JSON-RPC error.
    /// Covers unknown entrypoints and reverted calls.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The request never reached the node, or the connection dropped.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The node answered with something that is not a JSON-RPC response.
    #[error("Malformed response: {0}")]
    Parse(String),
}

/// Read-only gateway to a Starknet node.
///
/// Both operations are idempotent against unchanged chain state. Timeouts
/// are the implementation's concern; callers impose none of their own.
#[async_trait]
pub trait StarknetProvider: Send + Sync {
    /// Invoke a read-only entrypoint on a deployed contract.
    ///
    /// `calldata` is the ordered argument list, each element a hex word.
    /// Returns the ordered result words.
    async fn call(
        &self,
        network: Network,
        contract_address: &str,
        entrypoint: &str,
        calldata: &[String],
    ) -> Result<Vec<String>, ProviderError>;

    /// Look up the class hash bound to an address.
    ///
    /// `Ok(None)` means the node answered but no class is bound there.
    async fn class_hash_at(
        &self,
        network: Network,
        contract_address: &str,
    ) -> Result<Option<String>, ProviderError>;
}

// Shared providers verify too; lets callers keep a handle on the gateway
// they hand to the service.
#[async_trait]
impl<T: StarknetProvider + ?Sized> StarknetProvider for std::sync::Arc<T> {
    async fn call(
        &self,
        network: Network,
        contract_address: &str,
        entrypoint: &str,
        calldata: &[String],
    ) -> Result<Vec<String>, ProviderError> {
        (**self).call(network, contract_address, entrypoint, calldata).await
    }

    async fn class_hash_at(
        &self,
        network: Network,
        contract_address: &str,
    ) -> Result<Option<String>, ProviderError> {
        (**self).class_hash_at(network, contract_address).await
    }
}
