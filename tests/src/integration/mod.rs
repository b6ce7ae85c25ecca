//! # Integration Tests
//!
//! End-to-end verification flows plus the shared provider double.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use starkseal_verifier::{Network, ProviderError, StarknetProvider};

pub mod verification_flows;

/// Provider double: replays scripted `call` responses, records every
/// contract call, and counts class-hash lookups.
pub struct RecordingProvider {
    class_hash: Option<String>,
    responses: Mutex<VecDeque<Result<Vec<String>, ProviderError>>>,
    pub calls: Mutex<Vec<(String, String, Vec<String>)>>,
    pub class_hash_lookups: AtomicUsize,
}

impl RecordingProvider {
    pub fn deployed(responses: Vec<Result<Vec<String>, ProviderError>>) -> Self {
        Self {
            class_hash: Some("0x123456".to_string()),
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
            class_hash_lookups: AtomicUsize::new(0),
        }
    }

    pub fn undeployed() -> Self {
        Self {
            class_hash: None,
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            class_hash_lookups: AtomicUsize::new(0),
        }
    }

    pub fn entrypoints(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, entrypoint, _)| entrypoint.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl StarknetProvider for RecordingProvider {
    async fn call(
        &self,
        _network: Network,
        contract_address: &str,
        entrypoint: &str,
        calldata: &[String],
    ) -> Result<Vec<String>, ProviderError> {
        self.calls.lock().unwrap().push((
            contract_address.to_string(),
            entrypoint.to_string(),
            calldata.to_vec(),
        ));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Rpc("no scripted response".to_string())))
    }

    async fn class_hash_at(
        &self,
        _network: Network,
        _contract_address: &str,
    ) -> Result<Option<String>, ProviderError> {
        self.class_hash_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.class_hash.clone())
    }
}
