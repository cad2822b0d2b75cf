//! # Domain Entities
//!
//! Core data structures for signature verification.

use serde::{Deserialize, Serialize};
use shared_types::Address;

use super::errors::SignatureError;

/// `bytes4(keccak256("isValidSignature(bytes32,bytes)"))`, returned by an
/// ERC-1271 account that accepts a signature.
pub const ERC1271_MAGIC_VALUE: [u8; 4] = [0x16, 0x26, 0xba, 0x7e];

/// Conventional rejection value for ERC-1271 accounts.
pub const ERC1271_INVALID_VALUE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

// =============================================================================
// ECDSA Types (secp256k1)
// =============================================================================

/// ECDSA signature on the secp256k1 curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

impl EcdsaSignature {
    /// Decode a wire signature.
    ///
    /// Accepts the 65-byte `r || s || v` form produced by wallets and the
    /// 64-byte EIP-2098 compact form `r || (yParity << 255 | s)`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        match bytes.len() {
            65 => {
                r.copy_from_slice(&bytes[..32]);
                s.copy_from_slice(&bytes[32..64]);
                Ok(Self { r, s, v: bytes[64] })
            }
            64 => {
                r.copy_from_slice(&bytes[..32]);
                s.copy_from_slice(&bytes[32..]);
                let y_parity = s[0] >> 7;
                s[0] &= 0x7f;
                Ok(Self {
                    r,
                    s,
                    v: 27 + y_parity,
                })
            }
            n => Err(SignatureError::InvalidLength(n)),
        }
    }

    /// Encode as 65-byte `r || s || v`.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

/// Which signer model applies to an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignerKind {
    /// Externally owned secp256k1 key.
    Key,
    /// Account exposing its own `is_valid_signature` check.
    ProgrammableAccount,
}

// =============================================================================
// Verification Result
// =============================================================================

/// Result of signature verification.
#[derive(Clone, Debug)]
pub struct VerificationResult {
    /// Whether the signature is valid
    pub valid: bool,
    /// The recovered address (if verification succeeded)
    pub recovered_address: Option<Address>,
    /// Error details (if verification failed)
    pub error: Option<SignatureError>,
}

impl VerificationResult {
    /// Create a successful verification result.
    pub fn valid(recovered_address: Address) -> Self {
        Self {
            valid: true,
            recovered_address: Some(recovered_address),
            error: None,
        }
    }

    /// Create a failed verification result.
    pub fn invalid(error: SignatureError) -> Self {
        Self {
            valid: false,
            recovered_address: None,
            error: Some(error),
        }
    }
}
