//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the delegation protocol calls
//! - **Outbound (Driven)**: Lookup of programmable accounts

pub mod inbound;
pub mod outbound;
