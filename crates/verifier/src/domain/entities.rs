//! # Domain Entities
//!
//! Core data structures for signature verification.
//!
//! Addresses, hashes, signature words, and public keys are opaque hex
//! strings at this boundary; they become field elements only where the
//! math happens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{UnknownNetwork, VerifyError};

/// A Starknet chain the verifier can be pointed at.
///
/// The same address on two networks is two distinct accounts; no
/// cross-network identity is implied anywhere in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Sepolia,
}

impl Network {
    /// Canonical lowercase name, as used in config keys and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Sepolia => "sepolia",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = UnknownNetwork;

    /// Accepts the canonical names plus the legacy `alpha-mainnet` alias.
    /// Anything else fails fast; there is no default network.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" | "alpha-mainnet" => Ok(Network::Mainnet),
            "sepolia" => Ok(Network::Sepolia),
            other => Err(UnknownNetwork(other.to_string())),
        }
    }
}

/// Outcome of one verification call.
///
/// Constructed fresh per call and never mutated afterwards. `error` is
/// populated only when the negative path carries explanatory text: every
/// off-chain rejection does, while an on-chain numeric mismatch is a
/// plain `valid: false`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignatureVerdict {
    /// Whether the signature is valid for the account.
    pub valid: bool,
    /// Details when the signature was not accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<VerifyError>,
}

impl SignatureVerdict {
    /// An accepted signature.
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A rejected signature with the reason it was rejected.
    pub fn invalid(error: VerifyError) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }
}
