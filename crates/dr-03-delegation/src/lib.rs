//! # Delegation Protocol Subsystem (DR-03)
//!
//! Builds the EIP-712 digest of a `SubmitRequest` and uses it to authorize
//! submissions made by a relayer on a submitter's behalf.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): EIP-712 hashing, `DelegationError`
//! - **Ports Layer** (`ports/`): `DelegationApi`
//! - **Service Layer** (`service.rs`): signature check, then ledger write
//!
//! ## Replay Scope
//!
//! The domain separator binds each signature to one name, version, chain id
//! and verifying contract. There is no nonce; replay of the same request is
//! harmless because the ledger is write-once.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::eip712::{
    build_digest, encode_address, encode_uint, hash_typed_data, struct_hash, DomainConfig,
    EIP712_DOMAIN_FIELDS, EIP712_DOMAIN_TYPE, EIP712_DOMAIN_TYPEHASH, SUBMIT_REQUEST_TYPE,
    SUBMIT_REQUEST_TYPEHASH,
};
pub use domain::errors::DelegationError;
pub use ports::inbound::DelegationApi;
pub use service::DelegationService;
