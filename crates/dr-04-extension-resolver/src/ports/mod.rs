//! # Ports Layer
//!
//! Inbound [`inbound::ExtensionResolverApi`]. Edges are stored through, and
//! read from, the submission ledger.

pub mod inbound;
