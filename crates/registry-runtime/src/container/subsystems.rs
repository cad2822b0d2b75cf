//! # Subsystem Container
//!
//! Builds the in-memory adapters and services in dependency order and keeps
//! them behind `Arc` for shared ownership.

use std::sync::Arc;

use prometheus::CounterVec;
use tracing::{info, instrument};

use dr_01_signature_verification::{
    InMemoryAccountDirectory, SignatureVerificationService, SignerVerifier,
};
use dr_02_submission_ledger::{InMemoryLedgerStore, SubmissionLedger};
use dr_03_delegation::DelegationService;
use dr_04_extension_resolver::ExtensionResolver;
use shared_bus::InMemoryEventBus;
use registry_telemetry::{metric_inc, SIGNATURE_CHECKS};
use shared_types::{to_hex, Address, Hash};

use crate::container::config::{ConfigError, RegistryConfig};

/// Verifier dispatching over the in-memory account directory.
pub type ConcreteVerifier = SignatureVerificationService<InMemoryAccountDirectory>;

/// Ledger over the in-memory store, publishing to the in-memory bus.
pub type ConcreteLedger = SubmissionLedger<InMemoryLedgerStore, InMemoryEventBus>;

/// Delegation whose signature checks feed `dr_signature_checks_total`.
pub type ConcreteDelegation =
    DelegationService<ConcreteLedger, MeteredVerifier<ConcreteVerifier>>;

pub type ConcreteResolver = ExtensionResolver<ConcreteLedger>;

/// Counts each signature decision under `result="valid"|"invalid"`.
///
/// Batches are checked element by element, so every element reaching its
/// signature check is counted once.
pub struct MeteredVerifier<V> {
    inner: Arc<V>,
    checks: CounterVec,
}

impl<V> MeteredVerifier<V> {
    /// Count into the global `dr_signature_checks_total`.
    pub fn new(inner: Arc<V>) -> Self {
        Self::with_counter(inner, SIGNATURE_CHECKS.clone())
    }

    pub fn with_counter(inner: Arc<V>, checks: CounterVec) -> Self {
        Self { inner, checks }
    }
}

impl<V: SignerVerifier> SignerVerifier for MeteredVerifier<V> {
    fn is_valid(&self, signer: &Address, digest: &Hash, signature: &[u8]) -> bool {
        let valid = self.inner.is_valid(signer, digest, signature);
        metric_inc!(self.checks, &[if valid { "valid" } else { "invalid" }]);
        valid
    }
}

/// Central container holding all subsystem instances.
pub struct RegistryContainer {
    // =========================================================================
    // SHARED INFRASTRUCTURE
    // =========================================================================
    /// Notification bus; every successful mutation lands here once.
    pub event_bus: Arc<InMemoryEventBus>,

    /// Programmable accounts known to the verifier.
    pub accounts: Arc<InMemoryAccountDirectory>,

    // =========================================================================
    // SUBSYSTEMS
    // =========================================================================
    /// DR-01
    pub verifier: Arc<ConcreteVerifier>,

    /// DR-02
    pub ledger: Arc<ConcreteLedger>,

    /// DR-03
    pub delegation: Arc<ConcreteDelegation>,

    /// DR-04
    pub resolver: Arc<ConcreteResolver>,

    /// Configuration (immutable after initialization).
    pub config: RegistryConfig,
}

impl RegistryContainer {
    /// Validate `config` and wire every subsystem.
    #[instrument(skip_all, fields(domain = %config.domain.name))]
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let event_bus = Arc::new(InMemoryEventBus::with_capacity(config.event_bus_capacity));
        let accounts = Arc::new(InMemoryAccountDirectory::new());
        let verifier = Arc::new(SignatureVerificationService::new(Arc::clone(&accounts)));
        info!("[DR-01] Signature verification ready");

        let ledger = Arc::new(SubmissionLedger::new(
            Arc::new(InMemoryLedgerStore::new()),
            Arc::clone(&event_bus),
        ));
        info!("[DR-02] Submission ledger ready");

        let delegation = Arc::new(DelegationService::new(
            config.domain.clone(),
            Arc::clone(&ledger),
            Arc::new(MeteredVerifier::new(Arc::clone(&verifier))),
        ));
        info!(
            chain_id = %config.domain.chain_id,
            verifying_contract = %to_hex(&config.domain.verifying_contract),
            "[DR-03] Delegation protocol ready"
        );

        let resolver = Arc::new(ExtensionResolver::new(Arc::clone(&ledger), config.resolver));
        info!(
            max_depth = config.resolver.max_depth,
            max_visited = config.resolver.max_visited,
            "[DR-04] Extension resolver ready"
        );

        Ok(Self {
            event_bus,
            accounts,
            verifier,
            ledger,
            delegation,
            resolver,
            config,
        })
    }
}
