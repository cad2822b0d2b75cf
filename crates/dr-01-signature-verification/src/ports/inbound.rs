//! # Inbound Ports
//!
//! API exposed to the delegation subsystem and the registry facade.

use crate::domain::entities::SignerKind;
use crate::domain::errors::SignatureError;
use shared_types::{Address, Hash};

/// Primary API for signer verification.
pub trait SignatureVerificationApi: Send + Sync {
    /// Whether `signature` over `digest` is authorized by `signer`.
    ///
    /// Total: malformed input yields `false`.
    fn is_valid_signature(&self, signer: &Address, digest: &Hash, signature: &[u8]) -> bool;

    /// Recover the key address behind a 64- or 65-byte signature.
    fn recover_address(&self, digest: &Hash, signature: &[u8]) -> Result<Address, SignatureError>;

    /// Which signer model applies to `signer`.
    fn signer_kind(&self, signer: &Address) -> SignerKind;
}
