//! # Submission Ledger Service
//!
//! The single write path of the registry. Commits go to the [`LedgerStore`];
//! notifications go to the [`EventPublisher`] only after a commit succeeds.

use crate::domain::errors::LedgerError;
use crate::domain::state::{LedgerView, WriteBatch};
use crate::ports::inbound::SubmissionLedgerApi;
use crate::ports::outbound::LedgerStore;
use async_trait::async_trait;
use shared_bus::{EventPublisher, RegistryEvent};
use shared_types::{
    to_hex, Address, Cid, DaId, DaPointer, DataHash, SubmissionKey, SubmissionRecord,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Submission ledger backed by a store and an event publisher.
pub struct SubmissionLedger<S: LedgerStore, P: EventPublisher> {
    store: Arc<S>,
    publisher: Arc<P>,
}

impl<S: LedgerStore, P: EventPublisher> SubmissionLedger<S, P> {
    pub fn new(store: Arc<S>, publisher: Arc<P>) -> Self {
        Self { store, publisher }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn publisher(&self) -> &Arc<P> {
        &self.publisher
    }

    fn reject(&self, err: LedgerError, records: usize) -> LedgerError {
        warn!(error = %err, records, "Submission rejected");
        err
    }
}

#[async_trait]
impl<S, P> SubmissionLedgerApi for SubmissionLedger<S, P>
where
    S: LedgerStore + 'static,
    P: EventPublisher + 'static,
{
    type Snapshot = S::Snapshot;

    async fn put(&self, record: SubmissionRecord) -> Result<(), LedgerError> {
        self.store
            .commit(WriteBatch::submission(record.clone()))
            .map_err(|e| self.reject(e, 1))?;

        info!(
            submitter = %to_hex(&record.submitter),
            data_hash = %to_hex(&record.data_hash),
            da = %to_hex(&record.da),
            cid = %record.cid,
            "Submission recorded"
        );
        self.publisher.publish(RegistryEvent::from(record)).await;
        Ok(())
    }

    async fn put_batch(&self, records: Vec<SubmissionRecord>) -> Result<(), LedgerError> {
        let count = records.len();
        self.store
            .commit(records.iter().cloned().collect())
            .map_err(|e| self.reject(e, count))?;

        info!(records = count, "Submission batch recorded");
        for record in records {
            self.publisher.publish(RegistryEvent::from(record)).await;
        }
        Ok(())
    }

    async fn append_extension(
        &self,
        submitter: Address,
        old_submitter: Address,
    ) -> Result<(), LedgerError> {
        self.store
            .commit(WriteBatch::extension(submitter, old_submitter))?;

        info!(
            submitter = %to_hex(&submitter),
            old_submitter = %to_hex(&old_submitter),
            "Extension declared"
        );
        self.publisher
            .publish(RegistryEvent::ExtensionDeclared {
                new_submitter: submitter,
                old_submitter,
            })
            .await;
        Ok(())
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.store.snapshot()
    }

    fn get_direct(&self, submitter: &Address, data_hash: &DataHash, da: &DaId) -> Option<Cid> {
        let cid = self
            .store
            .snapshot()
            .cid(&SubmissionKey::new(*submitter, *data_hash, *da))
            .cloned();
        debug!(
            submitter = %to_hex(submitter),
            data_hash = %to_hex(data_hash),
            found = cid.is_some(),
            "Direct lookup"
        );
        cid
    }

    fn get_all_direct(&self, submitter: &Address, data_hash: &DataHash) -> Vec<DaPointer> {
        self.store.snapshot().all_direct(submitter, data_hash)
    }

    fn extended_addresses(&self, submitter: &Address) -> Vec<Address> {
        self.store.snapshot().extensions(submitter).to_vec()
    }
}
