//! # Inbound Ports
//!
//! API exposed to the delegation protocol, the extension resolver and the
//! registry facade.

use crate::domain::errors::LedgerError;
use crate::domain::state::LedgerView;
use async_trait::async_trait;
use shared_types::{Address, Cid, DaId, DaPointer, DataHash, SubmissionRecord};

/// Primary API for the submission ledger.
#[async_trait]
pub trait SubmissionLedgerApi: Send + Sync {
    /// Snapshot type handed to readers that need several consistent lookups.
    type Snapshot: LedgerView + Send + Sync;

    /// Record one submission and emit `SubmissionRecorded`.
    async fn put(&self, record: SubmissionRecord) -> Result<(), LedgerError>;

    /// Record every submission or none, then emit one event per record in order.
    async fn put_batch(&self, records: Vec<SubmissionRecord>) -> Result<(), LedgerError>;

    /// Append an extension edge and emit `ExtensionDeclared`.
    async fn append_extension(
        &self,
        submitter: Address,
        old_submitter: Address,
    ) -> Result<(), LedgerError>;

    /// Consistent view of the whole ledger.
    fn snapshot(&self) -> Self::Snapshot;

    /// Direct lookup, no extension resolution.
    fn get_direct(&self, submitter: &Address, data_hash: &DataHash, da: &DaId) -> Option<Cid>;

    /// Direct provider listing, no extension resolution.
    fn get_all_direct(&self, submitter: &Address, data_hash: &DataHash) -> Vec<DaPointer>;

    /// Extension edges of `submitter` in declaration order.
    fn extended_addresses(&self, submitter: &Address) -> Vec<Address>;
}
