//! # Shared Types Crate
//!
//! Primitive identifiers and request/record types used across the registry
//! subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Every crate uses these aliases and structs; no
//!   subsystem defines its own address or hash type.
//! - **Fixed-width keys**: Addresses are 20 bytes, data hashes and DA ids are 32
//!   bytes. Only the CID is variable length.
//! - **Hex on the wire**: All byte fields serialize as `0x`-prefixed hex strings.

pub mod encoding;
pub mod entities;
pub mod errors;

pub use encoding::{parse_bytes, parse_fixed, to_hex};
pub use entities::*;
pub use errors::EncodingError;
