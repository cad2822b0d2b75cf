//! # Delegation Service
//!
//! Authorizes writes and forwards them to the submission ledger.
//!
//! ## Error Precedence
//!
//! For each element, in order: signature, then empty CID, then duplicate
//! (against the ledger and earlier elements of the same batch). The first
//! failing element aborts the whole batch before anything is committed.

use crate::domain::eip712::{build_digest, DomainConfig};
use crate::domain::errors::DelegationError;
use crate::ports::inbound::DelegationApi;
use async_trait::async_trait;
use dr_01_signature_verification::SignerVerifier;
use dr_02_submission_ledger::{BatchValidator, SubmissionLedgerApi};
use shared_types::{
    to_hex, Address, Cid, DaId, DataHash, Hash, SignedSubmissionRequest, SubmissionRecord,
    SubmissionRequest,
};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct DelegationService<L, V> {
    domain: DomainConfig,
    domain_separator: Hash,
    ledger: Arc<L>,
    verifier: Arc<V>,
}

impl<L, V> DelegationService<L, V>
where
    L: SubmissionLedgerApi,
    V: SignerVerifier,
{
    pub fn new(domain: DomainConfig, ledger: Arc<L>, verifier: Arc<V>) -> Self {
        let domain_separator = domain.separator();
        debug!(
            name = %domain.name,
            chain_id = %domain.chain_id,
            separator = %to_hex(&domain_separator),
            "Signing domain initialized"
        );
        Self {
            domain,
            domain_separator,
            ledger,
            verifier,
        }
    }

    pub fn ledger(&self) -> &Arc<L> {
        &self.ledger
    }

    fn authorize(
        &self,
        submitter: &Address,
        signed: &SignedSubmissionRequest,
    ) -> Result<(), DelegationError> {
        let request = &signed.request;
        let digest = build_digest(
            &self.domain_separator,
            &request.data_hash,
            &request.da,
            request.cid.as_bytes(),
        );
        if self.verifier.is_valid(submitter, &digest, &signed.signature) {
            return Ok(());
        }

        warn!(
            submitter = %to_hex(submitter),
            data_hash = %to_hex(&request.data_hash),
            da = %to_hex(&request.da),
            "Delegated submission rejected: invalid signature"
        );
        Err(DelegationError::InvalidSignature {
            submitter: *submitter,
        })
    }
}

#[async_trait]
impl<L, V> DelegationApi for DelegationService<L, V>
where
    L: SubmissionLedgerApi + 'static,
    V: SignerVerifier + 'static,
{
    fn domain(&self) -> &DomainConfig {
        &self.domain
    }

    fn domain_separator(&self) -> Hash {
        self.domain_separator
    }

    fn submit_request_digest(&self, data_hash: &DataHash, da: &DaId, cid: &Cid) -> Hash {
        build_digest(&self.domain_separator, data_hash, da, cid.as_bytes())
    }

    fn verify(
        &self,
        signer: &Address,
        data_hash: &DataHash,
        da: &DaId,
        cid: &Cid,
        signature: &[u8],
    ) -> bool {
        let digest = self.submit_request_digest(data_hash, da, cid);
        self.verifier.is_valid(signer, &digest, signature)
    }

    async fn submit(
        &self,
        caller: Address,
        request: SubmissionRequest,
    ) -> Result<(), DelegationError> {
        self.ledger
            .put(SubmissionRecord::new(caller, request))
            .await
            .map_err(DelegationError::from)
    }

    async fn batch_submit(
        &self,
        caller: Address,
        requests: Vec<SubmissionRequest>,
    ) -> Result<(), DelegationError> {
        let records = requests
            .into_iter()
            .map(|request| SubmissionRecord::new(caller, request))
            .collect();
        self.ledger.put_batch(records).await?;
        Ok(())
    }

    async fn delegated_submit(
        &self,
        submitter: Address,
        request: SignedSubmissionRequest,
    ) -> Result<(), DelegationError> {
        self.authorize(&submitter, &request)?;
        self.ledger
            .put(SubmissionRecord::new(submitter, request.request))
            .await?;
        Ok(())
    }

    async fn batch_delegated_submit(
        &self,
        submitter: Address,
        requests: Vec<SignedSubmissionRequest>,
    ) -> Result<(), DelegationError> {
        let records = {
            let snapshot = self.ledger.snapshot();
            let mut validator = BatchValidator::new(&snapshot);
            let mut records = Vec::with_capacity(requests.len());

            for signed in requests {
                self.authorize(&submitter, &signed)?;
                let record = SubmissionRecord::new(submitter, signed.request);
                validator.admit(&record)?;
                records.push(record);
            }
            records
        };

        // The ledger re-validates under its writer lock
        self.ledger.put_batch(records).await?;
        Ok(())
    }
}
