//! # Signature Verification Service
//!
//! Application service implementing [`SignatureVerificationApi`].
//!
//! Wraps a [`SignatureChecker`] over an [`AccountDirectory`] so callers get
//! one entry point regardless of the signer model behind an address.

use crate::domain::ecdsa;
use crate::domain::entities::{EcdsaSignature, SignerKind};
use crate::domain::errors::SignatureError;
use crate::domain::verifier::{SignatureChecker, SignerVerifier};
use crate::ports::inbound::SignatureVerificationApi;
use crate::ports::outbound::AccountDirectory;
use shared_types::{Address, Hash};
use std::sync::Arc;
use tracing::debug;

/// Signature Verification Service.
pub struct SignatureVerificationService<D: AccountDirectory> {
    checker: SignatureChecker<D>,
}

impl<D: AccountDirectory> SignatureVerificationService<D> {
    /// Create a new service consulting `directory` for programmable accounts.
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            checker: SignatureChecker::new(directory),
        }
    }

    /// The account directory backing signer dispatch.
    pub fn directory(&self) -> &Arc<D> {
        self.checker.directory()
    }
}

impl<D: AccountDirectory> SignerVerifier for SignatureVerificationService<D> {
    fn is_valid(&self, signer: &Address, digest: &Hash, signature: &[u8]) -> bool {
        let valid = self.checker.is_valid(signer, digest, signature);
        debug!(
            signer = %shared_types::to_hex(signer),
            kind = ?self.checker.signer_kind(signer),
            valid,
            "Signature checked"
        );
        valid
    }
}

impl<D: AccountDirectory> SignatureVerificationApi for SignatureVerificationService<D> {
    fn is_valid_signature(&self, signer: &Address, digest: &Hash, signature: &[u8]) -> bool {
        SignerVerifier::is_valid(self, signer, digest, signature)
    }

    fn recover_address(&self, digest: &Hash, signature: &[u8]) -> Result<Address, SignatureError> {
        let sig = EcdsaSignature::from_bytes(signature)?;
        ecdsa::recover_address(digest, &sig)
    }

    fn signer_kind(&self, signer: &Address) -> SignerKind {
        self.checker.signer_kind(signer)
    }
}
