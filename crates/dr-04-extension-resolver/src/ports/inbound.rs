//! # Inbound Ports

use crate::domain::errors::ResolveError;
use crate::domain::walk::Resolution;
use async_trait::async_trait;
use dr_02_submission_ledger::LedgerError;
use shared_types::{Address, Cid, DaId, DaPointer, DataHash};

/// Extension edges and read-time history inheritance.
#[async_trait]
pub trait ExtensionResolverApi: Send + Sync {
    /// Append `old_address` to `submitter`'s edges. No uniqueness or cycle check.
    async fn extend(&self, submitter: Address, old_address: Address) -> Result<(), LedgerError>;

    /// Edges of `submitter` in declaration order.
    fn extended_addresses(&self, submitter: &Address) -> Vec<Address>;

    /// Direct listing if non-empty, otherwise the first non-empty listing along
    /// the chain, most recent edge first.
    fn resolve_all(&self, address: &Address, data_hash: &DataHash)
        -> Result<Vec<DaPointer>, ResolveError>;

    /// Single-DA variant of [`Self::resolve_all`].
    fn resolve_one(
        &self,
        address: &Address,
        data_hash: &DataHash,
        da: &DaId,
    ) -> Result<Option<Cid>, ResolveError>;

    /// [`Self::resolve_all`] with walk details.
    fn trace_all(
        &self,
        address: &Address,
        data_hash: &DataHash,
    ) -> Result<Resolution<Vec<DaPointer>>, ResolveError>;

    /// [`Self::resolve_one`] with walk details.
    fn trace_one(
        &self,
        address: &Address,
        data_hash: &DataHash,
        da: &DaId,
    ) -> Result<Resolution<Cid>, ResolveError>;
}
