//! # JSON-RPC Provider Adapter
//!
//! [`StarknetProvider`] implementation speaking the Starknet JSON-RPC
//! protocol (`starknet_call`, `starknet_getClassHashAt`) over HTTP against
//! a configured node per network.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::domain::entities::Network;
use crate::domain::stark::selector_from_name;
use crate::ports::outbound::{ProviderError, StarknetProvider};

/// JSON-RPC error code a node returns for an address with no contract.
const CONTRACT_NOT_FOUND: i64 = 20;

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: serde_json::Value,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<R> {
    result: Option<R>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// HTTP JSON-RPC client for Starknet nodes.
///
/// One instance serves every configured network; requests carry a
/// process-local incrementing id.
pub struct JsonRpcProvider {
    client: Client,
    config: ProviderConfig,
    request_id: AtomicU64,
}

impl JsonRpcProvider {
    /// Build a provider over the given endpoint configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            config,
            request_id: AtomicU64::new(1),
        })
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn request<R: serde::de::DeserializeOwned>(
        &self,
        network: Network,
        method: &str,
        params: serde_json::Value,
    ) -> Result<R, ProviderError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: self.next_id(),
        };
        debug!(%network, method, "starknet json-rpc request");

        let response = self
            .client
            .post(self.config.url_for(network))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let rpc: JsonRpcResponse<R> = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        if let Some(error) = rpc.error {
            if error.code == CONTRACT_NOT_FOUND {
                return Err(ProviderError::ContractNotFound(error.message));
            }
            return Err(ProviderError::Rpc(format!(
                "{} (code {})",
                error.message, error.code
            )));
        }

        rpc.result
            .ok_or_else(|| ProviderError::Parse("missing result in response".to_string()))
    }
}

#[async_trait]
impl StarknetProvider for JsonRpcProvider {
    async fn call(
        &self,
        network: Network,
        contract_address: &str,
        entrypoint: &str,
        calldata: &[String],
    ) -> Result<Vec<String>, ProviderError> {
        let selector = format!("{:#x}", selector_from_name(entrypoint));
        let params = json!([
            {
                "contract_address": contract_address,
                "entry_point_selector": selector,
                "calldata": calldata,
            },
            "latest",
        ]);
        self.request(network, "starknet_call", params).await
    }

    async fn class_hash_at(
        &self,
        network: Network,
        contract_address: &str,
    ) -> Result<Option<String>, ProviderError> {
        let params = json!(["latest", contract_address]);
        match self
            .request::<String>(network, "starknet_getClassHashAt", params)
            .await
        {
            // A zero class hash means nothing is bound to the address.
            Ok(hash) if hash.is_empty() || hash == "0x0" => Ok(None),
            Ok(hash) => Ok(Some(hash)),
            Err(ProviderError::ContractNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
