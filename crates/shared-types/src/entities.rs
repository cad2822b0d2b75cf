//! # Core Domain Entities
//!
//! Identifiers and records shared by the ledger, delegation and resolver
//! subsystems.
//!
//! ## Clusters
//!
//! - **Identifiers**: `Address`, `Hash`, `DataHash`, `DaId`, `Cid`
//! - **Ledger keys and records**: `SubmissionKey`, `SubmissionRecord`, `DaPointer`
//! - **Requests**: `SubmissionRequest`, `SignedSubmissionRequest`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::encoding::{hex_bytes, hex_fixed, to_hex};

// Re-export U256 from primitive-types for chain ids
pub use primitive_types::U256;

/// A 32-byte digest (keccak256 throughout the registry).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// Content hash of the blob a submission describes.
pub type DataHash = Hash;

/// Opaque 32-byte tag naming a data-availability backend.
pub type DaId = Hash;

/// The all-zero address. Never a valid signer.
pub const ZERO_ADDRESS: Address = [0u8; 20];

// =============================================================================
// CONTENT IDENTIFIER
// =============================================================================

/// Variable-length retrieval pointer understood by a DA backend.
///
/// A zero-length CID is the ledger's "absent" sentinel and is never stored.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cid(#[serde(with = "hex_bytes")] Vec<u8>);

impl Cid {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<u8>> for Cid {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Cid {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Cid {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Cid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(&self.0))
    }
}

impl fmt::Debug for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cid({})", to_hex(&self.0))
    }
}

// =============================================================================
// LEDGER KEYS AND RECORDS
// =============================================================================

/// Primary key of a submission record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionKey {
    #[serde(with = "hex_fixed")]
    pub submitter: Address,
    #[serde(with = "hex_fixed")]
    pub data_hash: DataHash,
    #[serde(with = "hex_fixed")]
    pub da: DaId,
}

impl SubmissionKey {
    pub fn new(submitter: Address, data_hash: DataHash, da: DaId) -> Self {
        Self {
            submitter,
            data_hash,
            da,
        }
    }
}

/// An immutable (submitter, dataHash, da) -> cid record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(with = "hex_fixed")]
    pub submitter: Address,
    #[serde(with = "hex_fixed")]
    pub data_hash: DataHash,
    #[serde(with = "hex_fixed")]
    pub da: DaId,
    pub cid: Cid,
}

impl SubmissionRecord {
    pub fn new(submitter: Address, request: SubmissionRequest) -> Self {
        Self {
            submitter,
            data_hash: request.data_hash,
            da: request.da,
            cid: request.cid,
        }
    }

    pub fn key(&self) -> SubmissionKey {
        SubmissionKey::new(self.submitter, self.data_hash, self.da)
    }
}

/// One entry of a provider listing: a DA id with the CID recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaPointer {
    #[serde(with = "hex_fixed")]
    pub da: DaId,
    pub cid: Cid,
}

impl DaPointer {
    pub fn new(da: DaId, cid: Cid) -> Self {
        Self { da, cid }
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// The payload a submitter registers (or signs for a relayer to register).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(with = "hex_fixed")]
    pub data_hash: DataHash,
    #[serde(with = "hex_fixed")]
    pub da: DaId,
    pub cid: Cid,
}

impl SubmissionRequest {
    pub fn new(data_hash: DataHash, da: DaId, cid: impl Into<Cid>) -> Self {
        Self {
            data_hash,
            da,
            cid: cid.into(),
        }
    }
}

/// A submission request carrying the submitter's EIP-712 signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedSubmissionRequest {
    #[serde(flatten)]
    pub request: SubmissionRequest,
    #[serde(with = "hex_bytes")]
    pub signature: Vec<u8>,
}

impl SignedSubmissionRequest {
    pub fn new(request: SubmissionRequest, signature: Vec<u8>) -> Self {
        Self { request, signature }
    }
}
