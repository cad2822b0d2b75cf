//! # Registry Benchmarks
//!
//! Criterion groups per subsystem, registered by `benches/registry_benchmarks.rs`.

pub mod dr_01_signature;
pub mod dr_02_ledger;
pub mod dr_04_resolver;
