//! # Signature Errors
//!
//! Error types for signature verification operations. These never escape
//! [`crate::SignerVerifier::is_valid`]; they surface only through
//! `recover_address` and [`crate::VerificationResult`] for diagnostics.

use shared_types::Address;
use thiserror::Error;

/// Errors that can occur during signature verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature encoding is not 64 or 65 bytes
    #[error("Invalid signature length: {0} bytes")]
    InvalidLength(usize),

    /// The signature format is invalid (zero or out-of-range scalar, bad R)
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Recovered signer does not match expected signer
    #[error("Signer mismatch: expected {expected:?}, got {actual:?}")]
    SignerMismatch { expected: Address, actual: Address },

    /// The programmable account rejected the signature or could not be called
    #[error("Programmable account rejected signature: {0}")]
    AccountRejected(String),
}
