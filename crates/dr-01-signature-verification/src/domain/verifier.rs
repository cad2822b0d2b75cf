//! # Signer Verifiers
//!
//! One verifier per signer model, plus [`SignatureChecker`] which picks the
//! model for a given address.

use super::ecdsa::verify_ecdsa_signer;
use super::entities::{EcdsaSignature, SignerKind, ERC1271_MAGIC_VALUE};
use crate::ports::outbound::AccountDirectory;
use shared_types::{Address, Hash, ZERO_ADDRESS};
use std::sync::Arc;
use tracing::trace;

/// Decides whether `signature` over `digest` was authorized by `signer`.
pub trait SignerVerifier: Send + Sync {
    /// Never panics and never errors; anything unverifiable is `false`.
    fn is_valid(&self, signer: &Address, digest: &Hash, signature: &[u8]) -> bool;
}

/// Externally owned secp256k1 key signer.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeySigner;

impl SignerVerifier for KeySigner {
    fn is_valid(&self, signer: &Address, digest: &Hash, signature: &[u8]) -> bool {
        // Recovery never legitimately yields the zero address
        if *signer == ZERO_ADDRESS {
            return false;
        }

        let sig = match EcdsaSignature::from_bytes(signature) {
            Ok(sig) => sig,
            Err(e) => {
                trace!(error = %e, "Undecodable key signature");
                return false;
            }
        };

        let result = verify_ecdsa_signer(digest, &sig, *signer);
        if let Some(e) = &result.error {
            trace!(error = %e, "Key signature rejected");
        }
        result.valid
    }
}

/// ERC-1271 account signer: the account's own check must return the magic value.
pub struct ProgrammableAccountSigner<D> {
    directory: Arc<D>,
}

impl<D: AccountDirectory> ProgrammableAccountSigner<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

impl<D: AccountDirectory> SignerVerifier for ProgrammableAccountSigner<D> {
    fn is_valid(&self, signer: &Address, digest: &Hash, signature: &[u8]) -> bool {
        let Some(account) = self.directory.programmable_account(signer) else {
            return false;
        };

        match account.is_valid_signature(digest, signature) {
            Ok(value) => value == ERC1271_MAGIC_VALUE,
            Err(e) => {
                trace!(error = %e, "Programmable account call failed");
                false
            }
        }
    }
}

/// Dispatches to the verifier matching the signer's model.
///
/// Addresses known to the directory are programmable accounts; every other
/// address is treated as an externally owned key.
pub struct SignatureChecker<D> {
    directory: Arc<D>,
    key: KeySigner,
    account: ProgrammableAccountSigner<D>,
}

impl<D: AccountDirectory> SignatureChecker<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            account: ProgrammableAccountSigner::new(Arc::clone(&directory)),
            key: KeySigner,
            directory,
        }
    }

    /// Which signer model applies to `signer`.
    pub fn signer_kind(&self, signer: &Address) -> SignerKind {
        if self.directory.is_programmable(signer) {
            SignerKind::ProgrammableAccount
        } else {
            SignerKind::Key
        }
    }

    /// The account directory consulted for dispatch.
    pub fn directory(&self) -> &Arc<D> {
        &self.directory
    }
}

impl<D: AccountDirectory> SignerVerifier for SignatureChecker<D> {
    fn is_valid(&self, signer: &Address, digest: &Hash, signature: &[u8]) -> bool {
        match self.signer_kind(signer) {
            SignerKind::Key => self.key.is_valid(signer, digest, signature),
            SignerKind::ProgrammableAccount => self.account.is_valid(signer, digest, signature),
        }
    }
}
