//! # EIP-712 Structured Data Hashing
//!
//! Digest construction for `SubmitRequest` messages, byte-compatible with
//! `eth_signTypedData_v4`:
//!
//! ```text
//! structHash = keccak256(SUBMIT_REQUEST_TYPEHASH || dataHash || da || keccak256(cid))
//! digest     = keccak256(0x19 || 0x01 || domainSeparator || structHash)
//! ```

use dr_01_signature_verification::keccak256;
use serde::{Deserialize, Serialize};
use shared_types::encoding::hex_fixed;
use shared_types::{Address, DaId, DataHash, Hash, U256};

/// `keccak256("EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)")`
pub const EIP712_DOMAIN_TYPEHASH: Hash = [
    0x8b, 0x73, 0xc3, 0xc6, 0x9b, 0xb8, 0xfe, 0x3d, 0x51, 0x2e, 0xcc, 0x4c, 0xf7, 0x59, 0xcc, 0x79,
    0x23, 0x9f, 0x7b, 0x17, 0x9b, 0x0f, 0xfa, 0xca, 0xa9, 0xa7, 0x5d, 0x52, 0x2b, 0x39, 0x40, 0x0f,
];

/// `keccak256("SubmitRequest(bytes32 dataHash,bytes32 da,bytes cid)")`
pub const SUBMIT_REQUEST_TYPEHASH: Hash = [
    0xe9, 0xc5, 0xa9, 0x2c, 0xff, 0x1d, 0x78, 0x64, 0x86, 0x6d, 0xd4, 0x1b, 0x86, 0x39, 0xa6, 0x94,
    0x8b, 0x05, 0xe5, 0xca, 0xb0, 0xa6, 0x6a, 0xab, 0xfd, 0x47, 0x7d, 0x9e, 0x71, 0x07, 0x43, 0x9f,
];

pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

pub const SUBMIT_REQUEST_TYPE: &str = "SubmitRequest(bytes32 dataHash,bytes32 da,bytes cid)";

/// EIP-5267 field bitmap: name, version, chainId, verifyingContract.
pub const EIP712_DOMAIN_FIELDS: u8 = 0x0f;

/// The signing domain binding every digest to one registry instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    pub name: String,
    pub version: String,
    pub chain_id: U256,
    #[serde(with = "hex_fixed")]
    pub verifying_contract: Address,
}

impl DomainConfig {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        chain_id: impl Into<U256>,
        verifying_contract: Address,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id: chain_id.into(),
            verifying_contract,
        }
    }

    /// `hashStruct(EIP712Domain)`.
    pub fn separator(&self) -> Hash {
        let mut encoded = Vec::with_capacity(5 * 32);
        encoded.extend_from_slice(&EIP712_DOMAIN_TYPEHASH);
        encoded.extend_from_slice(&keccak256(self.name.as_bytes()));
        encoded.extend_from_slice(&keccak256(self.version.as_bytes()));
        encoded.extend_from_slice(&encode_uint(self.chain_id));
        encoded.extend_from_slice(&encode_address(&self.verifying_contract));
        keccak256(&encoded)
    }

    /// EIP-5267 `fields` bitmap for this domain.
    pub fn fields(&self) -> u8 {
        EIP712_DOMAIN_FIELDS
    }
}

/// ABI-encode a uint256 as a 32-byte big-endian word.
pub fn encode_uint(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// ABI-encode an address, left-padded to 32 bytes.
pub fn encode_address(address: &Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address);
    word
}

/// `hashStruct(SubmitRequest)`. Dynamic `bytes` are encoded as their hash.
pub fn struct_hash(data_hash: &DataHash, da: &DaId, cid: &[u8]) -> Hash {
    let mut encoded = [0u8; 4 * 32];
    encoded[..32].copy_from_slice(&SUBMIT_REQUEST_TYPEHASH);
    encoded[32..64].copy_from_slice(data_hash);
    encoded[64..96].copy_from_slice(da);
    encoded[96..].copy_from_slice(&keccak256(cid));
    keccak256(&encoded)
}

/// `keccak256("\x19\x01" || domainSeparator || structHash)`.
pub fn hash_typed_data(domain_separator: &Hash, struct_hash: &Hash) -> Hash {
    let mut encoded = [0u8; 2 + 32 + 32];
    encoded[0] = 0x19;
    encoded[1] = 0x01;
    encoded[2..34].copy_from_slice(domain_separator);
    encoded[34..].copy_from_slice(struct_hash);
    keccak256(&encoded)
}

/// The digest a submitter signs to authorize a delegated submission.
pub fn build_digest(domain_separator: &Hash, data_hash: &DataHash, da: &DaId, cid: &[u8]) -> Hash {
    hash_typed_data(domain_separator, &struct_hash(data_hash, da, cid))
}
