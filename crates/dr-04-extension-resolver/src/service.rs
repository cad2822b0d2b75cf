//! # Extension Resolver Service
//!
//! Declares extension edges through the ledger and resolves reads against a
//! single ledger snapshot per call.

use crate::domain::config::ResolverConfig;
use crate::domain::errors::ResolveError;
use crate::domain::walk::{ChainWalker, Resolution};
use crate::ports::inbound::ExtensionResolverApi;
use async_trait::async_trait;
use dr_02_submission_ledger::{LedgerError, LedgerView, SubmissionLedgerApi};
use shared_types::{to_hex, Address, Cid, DaId, DaPointer, DataHash};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ExtensionResolver<L> {
    ledger: Arc<L>,
    config: ResolverConfig,
}

impl<L: SubmissionLedgerApi> ExtensionResolver<L> {
    pub fn new(ledger: Arc<L>, config: ResolverConfig) -> Self {
        Self { ledger, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    fn log_outcome<T>(
        &self,
        address: &Address,
        data_hash: &DataHash,
        outcome: &Result<Resolution<T>, ResolveError>,
    ) {
        match outcome {
            Ok(res) => debug!(
                address = %to_hex(address),
                data_hash = %to_hex(data_hash),
                found = res.value.is_some(),
                hops = res.hops,
                visited = res.visited,
                "Chain resolved"
            ),
            Err(e) => warn!(
                address = %to_hex(address),
                data_hash = %to_hex(data_hash),
                error = %e,
                "Chain resolution aborted"
            ),
        }
    }
}

#[async_trait]
impl<L: SubmissionLedgerApi + 'static> ExtensionResolverApi for ExtensionResolver<L> {
    async fn extend(&self, submitter: Address, old_address: Address) -> Result<(), LedgerError> {
        self.ledger.append_extension(submitter, old_address).await
    }

    fn extended_addresses(&self, submitter: &Address) -> Vec<Address> {
        self.ledger.snapshot().extensions(submitter).to_vec()
    }

    fn resolve_all(
        &self,
        address: &Address,
        data_hash: &DataHash,
    ) -> Result<Vec<DaPointer>, ResolveError> {
        Ok(self
            .trace_all(address, data_hash)?
            .value
            .unwrap_or_default())
    }

    fn resolve_one(
        &self,
        address: &Address,
        data_hash: &DataHash,
        da: &DaId,
    ) -> Result<Option<Cid>, ResolveError> {
        Ok(self.trace_one(address, data_hash, da)?.value)
    }

    fn trace_all(
        &self,
        address: &Address,
        data_hash: &DataHash,
    ) -> Result<Resolution<Vec<DaPointer>>, ResolveError> {
        let snapshot = self.ledger.snapshot();
        let outcome = ChainWalker::new(&snapshot, self.config).resolve_all(*address, data_hash);
        self.log_outcome(address, data_hash, &outcome);
        outcome
    }

    fn trace_one(
        &self,
        address: &Address,
        data_hash: &DataHash,
        da: &DaId,
    ) -> Result<Resolution<Cid>, ResolveError> {
        let snapshot = self.ledger.snapshot();
        let outcome = ChainWalker::new(&snapshot, self.config).resolve_one(*address, data_hash, da);
        self.log_outcome(address, data_hash, &outcome);
        outcome
    }
}
