//! # Domain Layer
//!
//! EIP-712 hashing and delegation errors. Pure functions only.

pub mod eip712;
pub mod errors;
