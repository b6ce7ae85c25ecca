//! # Verification Flow Tests
//!
//! Drives `SignatureVerificationService` through the inbound API and
//! checks which collaborator each deployment state reaches, the dialect
//! retry bound, and the verdict shapes.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use starknet_crypto::Felt;
    use starkseal_verifier::{
        Network, ProviderError, SignatureVerdict, SignatureVerificationApi,
        SignatureVerificationService, VerifyError,
    };

    use crate::integration::RecordingProvider;

    const ACCOUNT: &str = "0x04a2d8a5e9b1c3f07e3b4c6d9e8f1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b";

    /// Deterministic STARK-curve keypair with a signature over `hash`.
    fn signed_fixture(hash: Felt) -> (String, Vec<String>) {
        let private_key = Felt::from(0xdead_beef_cafe_u64);
        let public_key = starknet_crypto::get_public_key(&private_key);
        let k = Felt::from(0x1357_9bdf_u64);
        let signature = starknet_crypto::sign(&private_key, &hash, &k).unwrap();
        (
            format!("{public_key:#x}"),
            vec![
                format!("{:#x}", signature.r),
                format!("{:#x}", signature.s),
            ],
        )
    }

    fn dummy_signature() -> Vec<String> {
        vec!["0x11".to_string(), "0x22".to_string()]
    }

    fn service_over(
        provider: RecordingProvider,
    ) -> (
        Arc<RecordingProvider>,
        SignatureVerificationService<Arc<RecordingProvider>>,
    ) {
        let provider = Arc::new(provider);
        let service = SignatureVerificationService::new(Arc::clone(&provider));
        (provider, service)
    }

    #[tokio::test]
    async fn deployed_account_goes_on_chain_and_only_on_chain() {
        let (provider, service) =
            service_over(RecordingProvider::deployed(vec![Ok(vec!["0x1".to_string()])]));

        let verdict = service
            .verify_signature(
                ACCOUNT,
                "0x123",
                &dummy_signature(),
                Network::Mainnet,
                Some("0x999"),
            )
            .await;

        assert_eq!(verdict, SignatureVerdict::valid());
        assert_eq!(provider.entrypoints(), vec!["isValidSignature"]);
    }

    #[tokio::test]
    async fn undeployed_account_never_touches_the_network_call() {
        let hash = Felt::from(0x5555_u64);
        let (public_key, signature) = signed_fixture(hash);
        let (provider, service) = service_over(RecordingProvider::undeployed());

        let verdict = service
            .verify_signature(
                ACCOUNT,
                &format!("{hash:#x}"),
                &signature,
                Network::Sepolia,
                Some(&public_key),
            )
            .await;

        assert_eq!(verdict, SignatureVerdict::valid());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_public_key_is_terminal_for_undeployed_accounts() {
        let (_, service) = service_over(RecordingProvider::undeployed());

        let verdict = service
            .verify_signature(ACCOUNT, "0x123", &dummy_signature(), Network::Sepolia, None)
            .await;

        assert!(!verdict.valid);
        let message = verdict.error.unwrap().to_string();
        assert!(message.to_lowercase().contains("public key"), "{message}");
    }

    #[tokio::test]
    async fn tampered_signature_fails_local_verification() {
        let hash = Felt::from(0x5555_u64);
        let (public_key, mut signature) = signed_fixture(hash);
        signature[1] = format!("{:#x}", Felt::from_hex(&signature[1]).unwrap() + Felt::ONE);

        let (_, service) = service_over(RecordingProvider::undeployed());
        let verdict = service
            .verify_signature(
                ACCOUNT,
                &format!("{hash:#x}"),
                &signature,
                Network::Sepolia,
                Some(&public_key),
            )
            .await;

        assert!(!verdict.valid);
        assert_eq!(
            verdict.error.unwrap().to_string(),
            "Local verification failed"
        );
    }

    #[tokio::test]
    async fn failed_primary_entrypoint_retries_alternate_exactly_once() {
        let (provider, service) = service_over(RecordingProvider::deployed(vec![
            Err(ProviderError::Rpc("Entry point not found".to_string())),
            Ok(vec!["0x56414c4944".to_string()]),
        ]));

        let verdict = service
            .verify_signature(ACCOUNT, "0x123", &dummy_signature(), Network::Mainnet, None)
            .await;

        assert_eq!(verdict, SignatureVerdict::valid());
        assert_eq!(
            provider.entrypoints(),
            vec!["isValidSignature", "is_valid_signature"]
        );
    }

    #[tokio::test]
    async fn identical_inputs_yield_identical_verdicts() {
        let hash = Felt::from(0x7777_u64);
        let (public_key, signature) = signed_fixture(hash);
        let (_, service) = service_over(RecordingProvider::undeployed());

        let first = service
            .verify_signature(
                ACCOUNT,
                &format!("{hash:#x}"),
                &signature,
                Network::Sepolia,
                Some(&public_key),
            )
            .await;
        let second = service
            .verify_signature(
                ACCOUNT,
                &format!("{hash:#x}"),
                &signature,
                Network::Sepolia,
                Some(&public_key),
            )
            .await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn verdicts_serialize_for_api_consumers() {
        let (_, service) = service_over(RecordingProvider::undeployed());
        let verdict = service
            .verify_signature(ACCOUNT, "0x123", &dummy_signature(), Network::Sepolia, None)
            .await;

        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "valid": false,
                "error": "Public key is required for local verification",
            })
        );
        assert_eq!(
            serde_json::to_value(SignatureVerdict::valid()).unwrap(),
            serde_json::json!({ "valid": true })
        );
    }

    #[tokio::test]
    async fn wrong_arity_signatures_never_panic() {
        let (_, service) = service_over(RecordingProvider::undeployed());
        for signature in [vec!["0x1".to_string()], vec!["0x1".to_string(); 3]] {
            let verdict = service
                .verify_signature(ACCOUNT, "0x123", &signature, Network::Sepolia, Some("0x999"))
                .await;
            assert!(!verdict.valid);
            assert_eq!(verdict.error, Some(VerifyError::LocalVerificationFailed));
        }
    }
}
