//! # Delegation Flows
//!
//! Relayed submissions authorized by EIP-712 signatures, from plain keys and
//! from programmable accounts.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dr_01_signature_verification::test_helpers::{generate_account, sign_compact};
    use dr_01_signature_verification::{
        AccountCallError, OwnerKeyAccount, ProgrammableAccount, SignerKind,
    };
    use registry_runtime::RegistryConfig;
    use shared_types::{parse_fixed, Cid, Hash, SignedSubmissionRequest, SubmissionRequest};

    use crate::fixtures::{addr, registry, registry_with, signed, word, VERIFYING_CONTRACT};

    // =========================================================================
    // DIGESTS
    // =========================================================================

    #[test]
    fn test_default_domain_matches_reference_vectors() {
        let registry = registry();
        let separator: Hash =
            parse_fixed("0x9ce227f002d1a31a2b2bab065f59d3bb15642264659905d322ab210017c8459b")
                .unwrap();
        let digest: Hash =
            parse_fixed("0xcb7759e91e8a3e233547c250e6070f0ec1a1678b95c4797cb5a9bcf4c29f2454")
                .unwrap();

        assert_eq!(registry.domain_separator(), separator);
        assert_eq!(
            registry.submit_request_digest(&word(0x11), &word(0x22), &Cid::from(vec![0x12, 0x34])),
            digest
        );
    }

    #[test]
    fn test_digest_binds_every_field() {
        let registry = registry();
        let base = registry.submit_request_digest(&word(1), &word(2), &Cid::from(vec![0x01]));

        assert_ne!(
            base,
            registry.submit_request_digest(&word(3), &word(2), &Cid::from(vec![0x01]))
        );
        assert_ne!(
            base,
            registry.submit_request_digest(&word(1), &word(3), &Cid::from(vec![0x01]))
        );
        assert_ne!(
            base,
            registry.submit_request_digest(&word(1), &word(2), &Cid::from(vec![0x01, 0x00]))
        );
    }

    // =========================================================================
    // KEY SIGNERS
    // =========================================================================

    #[tokio::test]
    async fn test_relayed_submission_recorded_under_signer() {
        let registry = registry();
        let (key, submitter) = generate_account();
        let request = signed(&registry, &key, word(0x11), word(0xD1), vec![0x12, 0x34]);

        registry.delegated_submit(submitter, request).await.unwrap();

        assert_eq!(
            registry.get_direct(&submitter, &word(0x11), &word(0xD1)),
            Some(Cid::from(vec![0x12, 0x34]))
        );
    }

    #[tokio::test]
    async fn test_compact_signature_accepted() {
        let registry = registry();
        let (key, submitter) = generate_account();
        let cid = Cid::from(vec![0x42]);
        let digest = registry.submit_request_digest(&word(1), &word(2), &cid);
        let request = SignedSubmissionRequest::new(
            SubmissionRequest::new(word(1), word(2), cid),
            sign_compact(&digest, &key),
        );

        registry.delegated_submit(submitter, request).await.unwrap();
    }

    #[tokio::test]
    async fn test_tampered_request_rejected() {
        let registry = registry();
        let (key, submitter) = generate_account();
        let mut request = signed(&registry, &key, word(1), word(2), vec![0x01]);
        request.request.cid = Cid::from(vec![0x02]);

        let err = registry
            .delegated_submit(submitter, request)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_signature");
        assert!(registry.get_all_direct(&submitter, &word(1)).is_empty());
    }

    #[tokio::test]
    async fn test_malformed_signature_rejected_without_panic() {
        let registry = registry();
        let (_, submitter) = generate_account();
        for signature in [vec![], vec![0u8; 10], vec![0u8; 65], vec![0xff; 65]] {
            let request = SignedSubmissionRequest::new(
                SubmissionRequest::new(word(1), word(2), vec![0x01]),
                signature,
            );
            let err = registry
                .delegated_submit(submitter, request)
                .await
                .unwrap_err();
            assert_eq!(err.kind(), "invalid_signature");
        }
    }

    #[tokio::test]
    async fn test_signature_not_portable_across_domains() {
        let first = registry();
        let mut config = RegistryConfig::with_verifying_contract(VERIFYING_CONTRACT);
        config.domain.chain_id = 8453u64.into();
        let second = registry_with(config);

        let (key, submitter) = generate_account();
        let request = signed(&first, &key, word(1), word(2), vec![0x01]);

        assert!(first.verify_signature(
            &submitter,
            &request.request.data_hash,
            &request.request.da,
            &request.request.cid,
            &request.signature
        ));
        let err = second
            .delegated_submit(submitter, request)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_signature");
    }

    // =========================================================================
    // ERROR PRECEDENCE
    // =========================================================================

    #[tokio::test]
    async fn test_signature_checked_before_duplicate() {
        let registry = registry();
        let (key, submitter) = generate_account();
        registry
            .delegated_submit(
                submitter,
                signed(&registry, &key, word(1), word(2), vec![0x01]),
            )
            .await
            .unwrap();

        let (other_key, _) = generate_account();
        let forged = signed(&registry, &other_key, word(1), word(2), vec![0x02]);
        let err = registry
            .delegated_submit(submitter, forged)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_signature");

        let replay = signed(&registry, &key, word(1), word(2), vec![0x02]);
        let err = registry
            .delegated_submit(submitter, replay)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "duplicate");
    }

    #[tokio::test]
    async fn test_batch_aborts_on_first_bad_signature() {
        let registry = registry();
        let (key, submitter) = generate_account();
        let (other_key, _) = generate_account();
        let requests = vec![
            signed(&registry, &key, word(1), word(0xD1), vec![0x01]),
            signed(&registry, &other_key, word(1), word(0xD2), vec![0x02]),
            signed(&registry, &key, word(1), word(0xD3), vec![0x03]),
        ];

        let err = registry
            .batch_delegated_submit(submitter, requests)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_signature");
        assert!(registry.get_all_direct(&submitter, &word(1)).is_empty());
    }

    #[tokio::test]
    async fn test_batch_reports_earliest_failure() {
        let registry = registry();
        let (key, submitter) = generate_account();
        let (other_key, _) = generate_account();
        // Element 1 duplicates element 0; element 2 is forged.
        let requests = vec![
            signed(&registry, &key, word(1), word(0xD1), vec![0x01]),
            signed(&registry, &key, word(1), word(0xD1), vec![0x02]),
            signed(&registry, &other_key, word(1), word(0xD2), vec![0x03]),
        ];

        let err = registry
            .batch_delegated_submit(submitter, requests)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "duplicate");
        assert!(registry.get_all_direct(&submitter, &word(1)).is_empty());
    }

    #[tokio::test]
    async fn test_batch_delegated_commits_all() {
        let registry = registry();
        let (key, submitter) = generate_account();
        let requests = (1..=3u8)
            .map(|n| signed(&registry, &key, word(1), word(n), vec![n]))
            .collect();

        registry
            .batch_delegated_submit(submitter, requests)
            .await
            .unwrap();
        assert_eq!(registry.get_all_direct(&submitter, &word(1)).len(), 3);
    }

    // =========================================================================
    // PROGRAMMABLE ACCOUNTS
    // =========================================================================

    struct RejectingAccount;

    impl ProgrammableAccount for RejectingAccount {
        fn is_valid_signature(
            &self,
            _digest: &Hash,
            _signature: &[u8],
        ) -> Result<[u8; 4], AccountCallError> {
            Err(AccountCallError::Reverted("always".into()))
        }
    }

    #[tokio::test]
    async fn test_wallet_owner_signature_honored() {
        let registry = registry();
        let (owner_key, owner) = generate_account();
        let wallet = addr(0x77);
        registry.register_account(wallet, Arc::new(OwnerKeyAccount::new(owner)));
        assert_eq!(registry.signer_kind(&wallet), SignerKind::ProgrammableAccount);
        assert_eq!(registry.signer_kind(&owner), SignerKind::Key);

        let request = signed(&registry, &owner_key, word(1), word(2), vec![0x01]);
        registry.delegated_submit(wallet, request).await.unwrap();

        assert!(registry.get_direct(&wallet, &word(1), &word(2)).is_some());
        assert!(registry.get_direct(&owner, &word(1), &word(2)).is_none());
    }

    #[tokio::test]
    async fn test_wallet_rejects_foreign_key() {
        let registry = registry();
        let (_, owner) = generate_account();
        let (stranger_key, _) = generate_account();
        let wallet = addr(0x77);
        registry.register_account(wallet, Arc::new(OwnerKeyAccount::new(owner)));

        let request = signed(&registry, &stranger_key, word(1), word(2), vec![0x01]);
        let err = registry
            .delegated_submit(wallet, request)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_signature");
    }

    #[tokio::test]
    async fn test_reverting_wallet_treated_as_invalid() {
        let registry = registry();
        let (key, _) = generate_account();
        let wallet = addr(0x78);
        registry.register_account(wallet, Arc::new(RejectingAccount));

        let request = signed(&registry, &key, word(1), word(2), vec![0x01]);
        assert!(!registry.verify_signature(
            &wallet,
            &request.request.data_hash,
            &request.request.da,
            &request.request.cid,
            &request.signature
        ));
    }
}
