//! In-memory ledger store.
//!
//! Holds the state behind `RwLock<Arc<LedgerState>>`. Readers clone the `Arc`
//! and walk it without any lock held; a commit copies the state only when a
//! snapshot is still alive (`Arc::make_mut`).

use crate::domain::errors::LedgerError;
use crate::domain::state::{BatchValidator, LedgerState, WriteBatch};
use crate::ports::outbound::LedgerStore;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Default)]
pub struct InMemoryLedgerStore {
    state: RwLock<Arc<LedgerState>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store over existing contents.
    pub fn with_state(state: LedgerState) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
        }
    }
}

impl LedgerStore for InMemoryLedgerStore {
    type Snapshot = Arc<LedgerState>;

    fn snapshot(&self) -> Self::Snapshot {
        Arc::clone(&self.state.read())
    }

    fn commit(&self, batch: WriteBatch) -> Result<(), LedgerError> {
        let mut guard = self.state.write();
        BatchValidator::new(&**guard).admit_batch(&batch)?;
        Arc::make_mut(&mut *guard).apply(batch);
        Ok(())
    }
}
