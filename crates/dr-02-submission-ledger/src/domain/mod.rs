//! # Domain Layer
//!
//! Ledger state, write batches and admission rules. No I/O.

pub mod errors;
pub mod state;
