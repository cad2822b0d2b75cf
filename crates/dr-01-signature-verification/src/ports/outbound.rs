//! # Outbound Ports
//!
//! Dependencies the verifier needs from the hosting environment.

use shared_types::{Address, Hash};
use std::sync::Arc;
use thiserror::Error;

/// Failure to obtain a verdict from a programmable account.
///
/// Treated by the verifier exactly like a non-magic answer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountCallError {
    /// The account's check aborted.
    #[error("account call reverted: {0}")]
    Reverted(String),

    /// The account could not be reached.
    #[error("account unavailable: {0}")]
    Unavailable(String),
}

/// An account that decides signature validity with its own logic (ERC-1271).
pub trait ProgrammableAccount: Send + Sync {
    /// Return [`crate::ERC1271_MAGIC_VALUE`] to accept `signature` over `digest`.
    fn is_valid_signature(&self, digest: &Hash, signature: &[u8])
        -> Result<[u8; 4], AccountCallError>;
}

/// Lookup of programmable accounts by address.
pub trait AccountDirectory: Send + Sync {
    /// The programmable account deployed at `address`, if any.
    fn programmable_account(&self, address: &Address) -> Option<Arc<dyn ProgrammableAccount>>;

    /// Whether `address` holds a programmable account.
    fn is_programmable(&self, address: &Address) -> bool {
        self.programmable_account(address).is_some()
    }
}
