//! # DA Registry Facade
//!
//! One entry point over the wired subsystems. Writes go through DR-03, reads
//! through DR-02 (direct) or DR-04 (resolved). Every call updates the
//! Prometheus counters in `registry-telemetry`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use dr_01_signature_verification::{ProgrammableAccount, SignatureVerificationApi, SignerKind};
use dr_02_submission_ledger::{LedgerError, SubmissionLedgerApi};
use dr_03_delegation::{DelegationApi, DelegationError, EIP712_DOMAIN_FIELDS};
use dr_04_extension_resolver::{ExtensionResolverApi, Resolution, ResolveError};
use registry_telemetry::{
    metric_inc, metric_observe, EXTENSIONS_DECLARED, RESOLUTIONS, RESOLUTION_HOPS,
    SUBMISSIONS_RECORDED, SUBMISSIONS_REJECTED,
};
use shared_bus::{EventFilter, EventStream, EventSubscriber, Subscription};
use shared_types::encoding::hex_fixed;
use shared_types::{
    Address, Cid, DaId, DaPointer, DataHash, Hash, SignedSubmissionRequest, SubmissionRequest,
    U256,
};

use crate::container::{ConfigError, RegistryConfig, RegistryContainer};

/// Errors surfaced by [`DaRegistry`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Delegation(#[from] DelegationError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RegistryError {
    /// Stable machine-readable label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ledger(e) => e.reason(),
            Self::Delegation(e) => e.reason(),
            Self::Resolve(ResolveError::ChainTooDeep { .. }) => "chain_too_deep",
            Self::Resolve(ResolveError::Storage(_)) => "storage",
            Self::Config(_) => "config",
        }
    }
}

/// EIP-5267 view of the signing domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712Domain {
    /// Bitmap of the populated fields.
    pub fields: u8,
    pub name: String,
    pub version: String,
    pub chain_id: U256,
    #[serde(with = "hex_fixed")]
    pub verifying_contract: Address,
    #[serde(with = "hex_fixed")]
    pub salt: Hash,
    pub extensions: Vec<U256>,
}

/// The DA pointer registry.
pub struct DaRegistry {
    container: Arc<RegistryContainer>,
}

impl DaRegistry {
    /// Validate `config` and wire a fresh in-memory registry.
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let container = RegistryContainer::new(config)?;
        Ok(Self::from_container(Arc::new(container)))
    }

    pub fn from_container(container: Arc<RegistryContainer>) -> Self {
        Self { container }
    }

    pub fn container(&self) -> &Arc<RegistryContainer> {
        &self.container
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.container.config
    }

    // =========================================================================
    // WRITES
    // =========================================================================

    /// Record `(caller, data_hash, da) -> cid`.
    pub async fn submit(
        &self,
        caller: Address,
        data_hash: DataHash,
        da: DaId,
        cid: impl Into<Cid> + Send,
    ) -> Result<(), RegistryError> {
        let request = SubmissionRequest::new(data_hash, da, cid);
        let outcome = self.container.delegation.submit(caller, request).await;
        record_write(outcome, 1)
    }

    /// Record every request for `caller`, or none.
    pub async fn batch_submit(
        &self,
        caller: Address,
        requests: Vec<SubmissionRequest>,
    ) -> Result<(), RegistryError> {
        let count = requests.len();
        let outcome = self.container.delegation.batch_submit(caller, requests).await;
        record_write(outcome, count)
    }

    /// Record a request on behalf of `submitter`, authorized by its signature.
    pub async fn delegated_submit(
        &self,
        submitter: Address,
        request: SignedSubmissionRequest,
    ) -> Result<(), RegistryError> {
        let outcome = self
            .container
            .delegation
            .delegated_submit(submitter, request)
            .await;
        record_write(outcome, 1)
    }

    /// Delegated variant of [`Self::batch_submit`].
    pub async fn batch_delegated_submit(
        &self,
        submitter: Address,
        requests: Vec<SignedSubmissionRequest>,
    ) -> Result<(), RegistryError> {
        let count = requests.len();
        let outcome = self
            .container
            .delegation
            .batch_delegated_submit(submitter, requests)
            .await;
        record_write(outcome, count)
    }

    /// Append `old_address` to `caller`'s extension edges.
    pub async fn extend(&self, caller: Address, old_address: Address) -> Result<(), RegistryError> {
        match self.container.resolver.extend(caller, old_address).await {
            Ok(()) => {
                metric_inc!(EXTENSIONS_DECLARED);
                Ok(())
            }
            Err(e) => {
                metric_inc!(SUBMISSIONS_REJECTED, &[e.reason()]);
                Err(e.into())
            }
        }
    }

    // =========================================================================
    // SIGNATURES
    // =========================================================================

    /// Whether `signature` authorizes `(data_hash, da, cid)` for `submitter`.
    pub fn verify_signature(
        &self,
        submitter: &Address,
        data_hash: &DataHash,
        da: &DaId,
        cid: &Cid,
        signature: &[u8],
    ) -> bool {
        self.container
            .delegation
            .verify(submitter, data_hash, da, cid, signature)
    }

    /// Signer model the verifier applies to `address`.
    pub fn signer_kind(&self, address: &Address) -> SignerKind {
        self.container.verifier.signer_kind(address)
    }

    /// Make `address` a programmable account validated by `account`.
    pub fn register_account(&self, address: Address, account: Arc<dyn ProgrammableAccount>) {
        debug!(address = %shared_types::to_hex(&address), "Programmable account registered");
        self.container.accounts.register(address, account);
    }

    pub fn domain_separator(&self) -> Hash {
        self.container.delegation.domain_separator()
    }

    pub fn eip712_domain(&self) -> Eip712Domain {
        let domain = self.container.delegation.domain();
        Eip712Domain {
            fields: EIP712_DOMAIN_FIELDS,
            name: domain.name.clone(),
            version: domain.version.clone(),
            chain_id: domain.chain_id,
            verifying_contract: domain.verifying_contract,
            salt: [0u8; 32],
            extensions: Vec::new(),
        }
    }

    pub fn submit_request_digest(&self, data_hash: &DataHash, da: &DaId, cid: &Cid) -> Hash {
        self.container
            .delegation
            .submit_request_digest(data_hash, da, cid)
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// CID for `(submitter, data_hash, da)`, following extension edges.
    pub fn get(
        &self,
        submitter: &Address,
        data_hash: &DataHash,
        da: &DaId,
    ) -> Result<Option<Cid>, RegistryError> {
        let outcome = self.container.resolver.trace_one(submitter, data_hash, da);
        Ok(record_resolution(outcome)?.value)
    }

    /// Every `(da, cid)` for `(submitter, data_hash)`, following extension edges.
    pub fn get_all(
        &self,
        submitter: &Address,
        data_hash: &DataHash,
    ) -> Result<Vec<DaPointer>, RegistryError> {
        let outcome = self.container.resolver.trace_all(submitter, data_hash);
        Ok(record_resolution(outcome)?.value.unwrap_or_default())
    }

    pub fn get_direct(&self, submitter: &Address, data_hash: &DataHash, da: &DaId) -> Option<Cid> {
        self.container.ledger.get_direct(submitter, data_hash, da)
    }

    pub fn get_all_direct(&self, submitter: &Address, data_hash: &DataHash) -> Vec<DaPointer> {
        self.container.ledger.get_all_direct(submitter, data_hash)
    }

    pub fn extended_addresses(&self, submitter: &Address) -> Vec<Address> {
        self.container.resolver.extended_addresses(submitter)
    }

    // =========================================================================
    // NOTIFICATIONS
    // =========================================================================

    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        self.container.event_bus.subscribe(filter)
    }

    pub fn event_stream(&self, filter: EventFilter) -> EventStream {
        self.container.event_bus.event_stream(filter)
    }
}

fn record_write<E: Into<RegistryError>>(
    outcome: Result<(), E>,
    count: usize,
) -> Result<(), RegistryError> {
    match outcome {
        Ok(()) => {
            SUBMISSIONS_RECORDED.inc_by(count as f64);
            Ok(())
        }
        Err(e) => {
            let e = e.into();
            metric_inc!(SUBMISSIONS_REJECTED, &[e.kind()]);
            Err(e)
        }
    }
}

fn record_resolution<T>(
    outcome: Result<Resolution<T>, ResolveError>,
) -> Result<Resolution<T>, ResolveError> {
    let label = match &outcome {
        Ok(res) if res.value.is_none() => "miss",
        Ok(res) => {
            metric_observe!(RESOLUTION_HOPS, res.hops as f64);
            if res.hops == 0 {
                "direct"
            } else {
                "inherited"
            }
        }
        Err(ResolveError::ChainTooDeep { .. }) => "too_deep",
        Err(ResolveError::Storage(_)) => "storage",
    };
    metric_inc!(RESOLUTIONS, &[label]);
    outcome
}
