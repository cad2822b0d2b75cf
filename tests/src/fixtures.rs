//! Shared fixtures for flows and benchmarks.

use dr_01_signature_verification::test_helpers::sign_bytes;
use k256::ecdsa::SigningKey;
use registry_runtime::{DaRegistry, RegistryConfig};
use shared_types::{Address, Cid, DaId, DataHash, SignedSubmissionRequest, SubmissionRequest};

/// Verifying contract every fixture registry is bound to.
pub const VERIFYING_CONTRACT: Address = [0xcc; 20];

pub fn registry() -> DaRegistry {
    registry_with(RegistryConfig::with_verifying_contract(VERIFYING_CONTRACT))
}

pub fn registry_with(config: RegistryConfig) -> DaRegistry {
    match DaRegistry::new(config) {
        Ok(registry) => registry,
        Err(e) => panic!("fixture config rejected: {e}"),
    }
}

/// Address with every byte set to `n`.
pub fn addr(n: u8) -> Address {
    [n; 20]
}

/// 32-byte identifier with every byte set to `n`.
pub fn word(n: u8) -> [u8; 32] {
    [n; 32]
}

/// Request signed by `key` for `registry`'s domain.
pub fn signed(
    registry: &DaRegistry,
    key: &SigningKey,
    data_hash: DataHash,
    da: DaId,
    cid: impl Into<Cid>,
) -> SignedSubmissionRequest {
    let request = SubmissionRequest::new(data_hash, da, cid);
    let digest = registry.submit_request_digest(&request.data_hash, &request.da, &request.cid);
    SignedSubmissionRequest::new(request, sign_bytes(&digest, key))
}
