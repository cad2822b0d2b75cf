//! # Integration Flows
//!
//! Every flow drives the wired registry through `DaRegistry`, the same entry
//! point the command binary uses.
//!
//! - `ledger_flows` - write-once, provider index, batch atomicity
//! - `delegation_flows` - EIP-712 digests, key and programmable-account signers
//! - `extension_flows` - inheritance precedence, shadowing, bounded walks
//! - `event_flows` - exactly-once notifications
//! - `command_flows` - JSON-lines protocol end to end

pub mod command_flows;
pub mod delegation_flows;
pub mod event_flows;
pub mod extension_flows;
