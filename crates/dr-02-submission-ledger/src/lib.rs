//! # Submission Ledger Subsystem (DR-02)
//!
//! Write-once store of (submitter, dataHash, da) -> cid records, the
//! per-(submitter, dataHash) provider index and per-submitter extension edges.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `LedgerState`, `WriteBatch`, admission rules
//! - **Ports Layer** (`ports/`): `SubmissionLedgerApi` (inbound), `LedgerStore` (outbound)
//! - **Adapters Layer** (`adapters/`): `InMemoryLedgerStore`
//! - **Service Layer** (`service.rs`): commit then publish
//!
//! ## Guarantees
//!
//! | Guarantee | Mechanism |
//! |-----------|-----------|
//! | Write-once | duplicate keys rejected under the writer lock |
//! | Batch atomicity | whole batch validated before any state changes |
//! | Snapshot reads | readers hold an `Arc` of immutable state |
//! | Exactly-once events | published after commit, never on failure |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::memory::InMemoryLedgerStore;
pub use domain::errors::LedgerError;
pub use domain::state::{BatchValidator, LedgerOp, LedgerState, LedgerView, WriteBatch};
pub use ports::inbound::SubmissionLedgerApi;
pub use ports::outbound::LedgerStore;
pub use service::SubmissionLedger;
