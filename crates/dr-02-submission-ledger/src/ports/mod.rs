//! # Ports Layer
//!
//! - **Inbound (Driving)**: [`inbound::SubmissionLedgerApi`]
//! - **Outbound (Driven)**: [`outbound::LedgerStore`]

pub mod inbound;
pub mod outbound;
