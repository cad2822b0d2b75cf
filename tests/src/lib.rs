//! # DA Pointer Registry Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion groups per subsystem
//! │   ├── dr_01_signature.rs
//! │   ├── dr_02_ledger.rs
//! │   └── dr_04_resolver.rs
//! │
//! └── integration/      # Cross-subsystem flows through DaRegistry
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p dr-tests
//!
//! # By category
//! cargo test -p dr-tests integration::
//!
//! # Benchmarks
//! cargo bench -p dr-tests
//! ```

pub mod benchmarks;
pub mod fixtures;
pub mod integration;
