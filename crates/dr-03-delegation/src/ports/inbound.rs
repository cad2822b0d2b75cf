//! # Inbound Ports

use crate::domain::eip712::DomainConfig;
use crate::domain::errors::DelegationError;
use async_trait::async_trait;
use shared_types::{Address, Cid, DaId, DataHash, Hash, SignedSubmissionRequest, SubmissionRequest};

/// Write paths of the registry, direct and delegated.
#[async_trait]
pub trait DelegationApi: Send + Sync {
    /// The signing domain of this instance.
    fn domain(&self) -> &DomainConfig;

    /// Cached domain separator.
    fn domain_separator(&self) -> Hash;

    /// Digest a submitter signs for `(data_hash, da, cid)`.
    fn submit_request_digest(&self, data_hash: &DataHash, da: &DaId, cid: &Cid) -> Hash;

    /// Whether `signature` authorizes the request for `signer`. Never errors.
    fn verify(
        &self,
        signer: &Address,
        data_hash: &DataHash,
        da: &DaId,
        cid: &Cid,
        signature: &[u8],
    ) -> bool;

    /// Record a submission made by `caller` itself.
    async fn submit(
        &self,
        caller: Address,
        request: SubmissionRequest,
    ) -> Result<(), DelegationError>;

    /// Record several submissions by `caller`, all or nothing.
    async fn batch_submit(
        &self,
        caller: Address,
        requests: Vec<SubmissionRequest>,
    ) -> Result<(), DelegationError>;

    /// Record a submission on behalf of `submitter`, authorized by its signature.
    async fn delegated_submit(
        &self,
        submitter: Address,
        request: SignedSubmissionRequest,
    ) -> Result<(), DelegationError>;

    /// Delegated variant of [`Self::batch_submit`].
    async fn batch_delegated_submit(
        &self,
        submitter: Address,
        requests: Vec<SignedSubmissionRequest>,
    ) -> Result<(), DelegationError>;
}
