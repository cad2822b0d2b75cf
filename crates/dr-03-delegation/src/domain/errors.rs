//! # Delegation Errors

use dr_02_submission_ledger::LedgerError;
use shared_types::{to_hex, Address};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DelegationError {
    /// The signature does not authorize the request for `submitter`.
    #[error("invalid signature for submitter {}", to_hex(.submitter))]
    InvalidSignature { submitter: Address },

    /// The authorized write was refused by the ledger.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl DelegationError {
    /// Short label used for rejection metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidSignature { .. } => "invalid_signature",
            Self::Ledger(e) => e.reason(),
        }
    }
}
