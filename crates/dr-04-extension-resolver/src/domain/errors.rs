//! # Resolution Errors

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The walk needed more hops or addresses than allowed.
    #[error("extension chain exceeds limit of {limit}")]
    ChainTooDeep { limit: usize },

    /// The ledger snapshot could not be read.
    #[error("storage error: {0}")]
    Storage(String),
}
