//! # Signature Verification Subsystem (DR-01)
//!
//! Decides whether a byte-exact digest was authorized by a claimed address.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): Inbound API and the outbound account directory
//! - **Adapters Layer** (`adapters/`): In-memory account directory, owner-key wallet
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Signer Models
//!
//! | Signer | Variant | Check |
//! |--------|---------|-------|
//! | Externally owned key | [`KeySigner`] | secp256k1 recovery, recovered address == signer |
//! | Programmable account | [`ProgrammableAccountSigner`] | account's `is_valid_signature` returns `0x1626ba7e` |
//!
//! [`SignatureChecker`] picks the variant by asking the [`AccountDirectory`]
//! whether the signer is a programmable account.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: Signatures with high S values are rejected
//! - **Total**: Malformed encodings yield `false`, never a panic or an error

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::accounts::{InMemoryAccountDirectory, OwnerKeyAccount};
pub use domain::ecdsa::{address_from_pubkey, keccak256, recover_address};
pub use domain::entities::{
    EcdsaSignature, SignerKind, VerificationResult, ERC1271_INVALID_VALUE, ERC1271_MAGIC_VALUE,
};
pub use domain::errors::SignatureError;
pub use domain::verifier::{KeySigner, ProgrammableAccountSigner, SignatureChecker, SignerVerifier};
pub use ports::inbound::SignatureVerificationApi;
pub use ports::outbound::{AccountCallError, AccountDirectory, ProgrammableAccount};
pub use service::SignatureVerificationService;

#[cfg(any(test, feature = "test-helpers"))]
pub use domain::ecdsa::test_helpers;
