//! # ECDSA Verification (secp256k1)
//!
//! Pure domain logic for recovering and checking externally owned key signers.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: S must not exceed SECP256K1_HALF_ORDER
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **R Point Validation**: R must be a valid x-coordinate on the secp256k1 curve
//! - **Constant-Time Operations**: Uses `subtle` crate for side-channel resistance

use super::entities::{EcdsaSignature, VerificationResult};
use super::errors::SignatureError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::FromEncodedPoint;
use k256::{AffinePoint, EncodedPoint};
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash};
use subtle::{Choice, ConstantTimeEq};

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// n/2, rounded down.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

// =============================================================================
// CORE VERIFICATION FUNCTIONS
// =============================================================================

/// Verify an ECDSA signature and recover the signer address.
///
/// Checks, in order:
/// 1. R is in [1, n-1] and is the x-coordinate of a curve point
/// 2. S is in [1, n-1]
/// 3. S is in the lower half of the order (EIP-2)
/// 4. v maps to a recovery id and public key recovery succeeds
pub fn verify_ecdsa(digest: &Hash, signature: &EcdsaSignature) -> VerificationResult {
    if !is_valid_scalar(&signature.r) || !is_valid_r_coordinate(&signature.r) {
        return VerificationResult::invalid(SignatureError::InvalidFormat);
    }

    if !is_valid_scalar(&signature.s) {
        return VerificationResult::invalid(SignatureError::InvalidFormat);
    }

    if !is_low_s(&signature.s) {
        return VerificationResult::invalid(SignatureError::MalleableSignature);
    }

    match recover_address(digest, signature) {
        Ok(address) => VerificationResult::valid(address),
        Err(e) => VerificationResult::invalid(e),
    }
}

/// Verify an ECDSA signature and check that the recovered signer matches.
pub fn verify_ecdsa_signer(
    digest: &Hash,
    signature: &EcdsaSignature,
    expected: Address,
) -> VerificationResult {
    let result = verify_ecdsa(digest, signature);

    match result.recovered_address {
        Some(recovered) if recovered != expected => {
            VerificationResult::invalid(SignatureError::SignerMismatch {
                expected,
                actual: recovered,
            })
        }
        _ => result,
    }
}

/// Recover the signer's address from a signature over a 32-byte prehash.
///
/// Performs no malleability or range screening of its own; use
/// [`verify_ecdsa`] for the full check.
pub fn recover_address(digest: &Hash, signature: &EcdsaSignature) -> Result<Address, SignatureError> {
    use zeroize::Zeroize;

    let recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    let parsed = Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();
    let sig = parsed.map_err(|_| SignatureError::InvalidFormat)?;

    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Keccak-256 of arbitrary bytes.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Derive the 20-byte account address of a public key.
///
/// `keccak256(x || y)[12..]` over the uncompressed point without its 0x04 tag.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let hash = keccak256(&pubkey_bytes.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Constant-time big-endian comparison. Returns `(less, greater)`.
fn ct_compare(a: &[u8; 32], b: &[u8; 32]) -> (Choice, Choice) {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let not_decided = !(less | greater);
        less |= not_decided & Choice::from((a[i] < b[i]) as u8);
        greater |= not_decided & Choice::from((a[i] > b[i]) as u8);
    }

    (less, greater)
}

/// S at most n/2 (EIP-2).
fn is_low_s(s: &[u8; 32]) -> bool {
    let (_, greater) = ct_compare(s, &SECP256K1_HALF_ORDER);
    (!greater).into()
}

/// Scalar in [1, n-1].
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for &byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    let (less, _) = ct_compare(scalar, &SECP256K1_ORDER);
    (!is_zero & less).into()
}

/// R must decompress to a point on the curve. Roughly half of all field
/// elements do not.
fn is_valid_r_coordinate(r: &[u8; 32]) -> bool {
    let mut compressed = [0u8; 33];
    compressed[0] = 0x02;
    compressed[1..].copy_from_slice(r);

    let encoded = match EncodedPoint::from_bytes(compressed) {
        Ok(e) => e,
        Err(_) => return false,
    };

    AffinePoint::from_encoded_point(&encoded).is_some().into()
}

/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| SignatureError::InvalidRecoveryId(v))
}

/// s' = n - s. Maps a low-S signature onto its malleable twin and back.
pub fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;

    for i in (0..32).rev() {
        let diff = (SECP256K1_ORDER[i] as i32) - (s[i] as i32) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }

    result
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use super::*;
    use k256::ecdsa::SigningKey;

    /// Generate a new ECDSA keypair.
    pub fn generate_keypair() -> (SigningKey, VerifyingKey) {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        let verifying_key = *signing_key.verifying_key();
        (signing_key, verifying_key)
    }

    /// Generate a signing key together with its account address.
    pub fn generate_account() -> (SigningKey, Address) {
        let (signing_key, verifying_key) = generate_keypair();
        (signing_key, address_from_pubkey(&verifying_key))
    }

    /// Sign a 32-byte digest, normalized to low S with v in {27, 28}.
    pub fn sign(digest: &Hash, private_key: &SigningKey) -> EcdsaSignature {
        let (sig, recid) = private_key
            .sign_prehash_recoverable(digest)
            .expect("signing failed");

        let sig_bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig_bytes[..32]);
        s.copy_from_slice(&sig_bytes[32..]);

        if is_low_s(&s) {
            EcdsaSignature {
                r,
                s,
                v: recid.to_byte() + 27,
            }
        } else {
            // Negating s flips the parity of the recovered point
            EcdsaSignature {
                r,
                s: invert_s(&s),
                v: if recid.to_byte() == 0 { 28 } else { 27 },
            }
        }
    }

    /// Sign and encode as 65-byte `r || s || v`.
    pub fn sign_bytes(digest: &Hash, private_key: &SigningKey) -> Vec<u8> {
        sign(digest, private_key).to_bytes().to_vec()
    }

    /// Sign and encode in the 64-byte EIP-2098 compact form.
    pub fn sign_compact(digest: &Hash, private_key: &SigningKey) -> Vec<u8> {
        let sig = sign(digest, private_key);
        let mut out = Vec::with_capacity(64);
        out.extend_from_slice(&sig.r);
        let mut s = sig.s;
        if sig.v == 28 {
            s[0] |= 0x80;
        }
        out.extend_from_slice(&s);
        out
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
