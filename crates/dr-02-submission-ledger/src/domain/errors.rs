//! # Ledger Errors

use shared_types::{to_hex, Address, DaId, DataHash};
use thiserror::Error;

/// Errors returned by ledger writes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A record already exists for this (submitter, dataHash, da).
    #[error(
        "duplicate submission: submitter {} data_hash {} da {}",
        to_hex(.submitter),
        to_hex(.data_hash),
        to_hex(.da)
    )]
    DuplicateSubmission {
        submitter: Address,
        data_hash: DataHash,
        da: DaId,
    },

    /// Zero-length CIDs are indistinguishable from absence and never stored.
    #[error("empty cid")]
    EmptyCid,

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Short label used for rejection metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::DuplicateSubmission { .. } => "duplicate",
            Self::EmptyCid => "empty_cid",
            Self::Storage(_) => "storage",
        }
    }
}
