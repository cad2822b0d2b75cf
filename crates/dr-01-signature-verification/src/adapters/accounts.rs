//! In-memory account directory and a minimal owner-key smart wallet.

use crate::domain::ecdsa::verify_ecdsa_signer;
use crate::domain::entities::{EcdsaSignature, ERC1271_INVALID_VALUE, ERC1271_MAGIC_VALUE};
use crate::ports::outbound::{AccountCallError, AccountDirectory, ProgrammableAccount};
use parking_lot::RwLock;
use shared_types::{Address, Hash};
use std::collections::HashMap;
use std::sync::Arc;

/// Directory of programmable accounts held in memory.
#[derive(Default)]
pub struct InMemoryAccountDirectory {
    accounts: RwLock<HashMap<Address, Arc<dyn ProgrammableAccount>>>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploy `account` at `address`, replacing any previous account.
    pub fn register(&self, address: Address, account: Arc<dyn ProgrammableAccount>) {
        self.accounts.write().insert(address, account);
    }

    /// Remove the account at `address`. Returns whether one existed.
    pub fn unregister(&self, address: &Address) -> bool {
        self.accounts.write().remove(address).is_some()
    }

    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    fn programmable_account(&self, address: &Address) -> Option<Arc<dyn ProgrammableAccount>> {
        self.accounts.read().get(address).cloned()
    }
}

/// Smart wallet that accepts any signature made by its single owner key.
#[derive(Debug, Clone, Copy)]
pub struct OwnerKeyAccount {
    owner: Address,
}

impl OwnerKeyAccount {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }
}

impl ProgrammableAccount for OwnerKeyAccount {
    fn is_valid_signature(
        &self,
        digest: &Hash,
        signature: &[u8],
    ) -> Result<[u8; 4], AccountCallError> {
        let sig = EcdsaSignature::from_bytes(signature)
            .map_err(|e| AccountCallError::Reverted(e.to_string()))?;

        if verify_ecdsa_signer(digest, &sig, self.owner).valid {
            Ok(ERC1271_MAGIC_VALUE)
        } else {
            Ok(ERC1271_INVALID_VALUE)
        }
    }
}
