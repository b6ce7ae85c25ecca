//! # Starkseal Signature Verification
//!
//! Verifies wallet signatures against Starknet account contracts.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure logic, no I/O (STARK-curve math,
//!   entrypoint selectors, verdict types)
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Service Layer** (`service.rs`): The verification state machine
//! - **Adapters** (`adapters/`): JSON-RPC provider backed by a Starknet node
//!
//! ## Verification Flow
//!
//! ```text
//! verify_signature
//!        │
//!        ├── account deployed? ──── class-hash lookup (lookup failure = "no")
//!        │
//!        ├── yes ──→ read-only call to the account's validation entrypoint
//!        │           (isValidSignature, one retry as is_valid_signature)
//!        │
//!        └── no ───→ STARK-curve ECDSA check against the raw public key
//!                    (requires the caller to supply the key)
//! ```
//!
//! Every path terminates in a [`SignatureVerdict`]; no error escapes the
//! orchestrator.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::rpc::JsonRpcProvider;
pub use config::ProviderConfig;
pub use domain::entities::{Network, SignatureVerdict};
pub use domain::errors::{UnknownNetwork, VerifyError};
pub use domain::stark::{selector_from_name, verify_local};
pub use ports::inbound::SignatureVerificationApi;
pub use ports::outbound::{ProviderError, StarknetProvider};
pub use service::SignatureVerificationService;
