//! # Provider Configuration
//!
//! Per-network node endpoints for the JSON-RPC adapter.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Network;

const DEFAULT_MAINNET_URL: &str = "https://starknet-mainnet.public.blastapi.io/rpc/v0_7";
const DEFAULT_SEPOLIA_URL: &str = "https://starknet-sepolia.public.blastapi.io/rpc/v0_7";

/// Endpoint configuration for [`crate::JsonRpcProvider`].
///
/// Defaults point at public nodes; deployments override via config file or
/// the `STARKNET_*_RPC_URL` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub mainnet_url: String,
    pub sepolia_url: String,
    /// Overall request timeout, seconds.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            mainnet_url: DEFAULT_MAINNET_URL.to_string(),
            sepolia_url: DEFAULT_SEPOLIA_URL.to_string(),
            timeout_secs: 5,
        }
    }
}

impl ProviderConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("STARKNET_MAINNET_RPC_URL") {
            config.mainnet_url = url;
        }
        if let Ok(url) = std::env::var("STARKNET_SEPOLIA_RPC_URL") {
            config.sepolia_url = url;
        }
        config
    }

    /// Node endpoint for a network.
    pub fn url_for(&self, network: Network) -> &str {
        match network {
            Network::Mainnet => &self.mainnet_url,
            Network::Sepolia => &self.sepolia_url,
        }
    }
}
