//! # Outbound Ports
//!
//! Storage the ledger service is wired to at startup.

use crate::domain::errors::LedgerError;
use crate::domain::state::{LedgerView, WriteBatch};

/// Backing store for the ledger maps.
///
/// Production deployments plug in their own persistence; tests and the
/// runtime use [`crate::InMemoryLedgerStore`].
pub trait LedgerStore: Send + Sync {
    /// Immutable point-in-time view.
    type Snapshot: LedgerView + Send + Sync;

    /// Take a consistent snapshot. Never blocks on an in-flight read.
    fn snapshot(&self) -> Self::Snapshot;

    /// Validate and apply `batch` atomically.
    ///
    /// Either every operation is applied or none is. Validation happens under
    /// the same exclusive section as the apply, so concurrent writers to one key
    /// see exactly one success.
    fn commit(&self, batch: WriteBatch) -> Result<(), LedgerError>;
}
