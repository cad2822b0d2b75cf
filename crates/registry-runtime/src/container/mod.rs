//! # Registry Container
//!
//! Holds the subsystem instances of one registry and wires their ports.
//!
//! ## Dependency Order
//!
//! - DR-01 (account directory, verifier) and the event bus have no dependencies
//! - DR-02 (ledger) publishes to the event bus
//! - DR-03 (delegation) depends on DR-01 and DR-02
//! - DR-04 (resolver) reads DR-02 snapshots

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, RegistryConfig};
pub use subsystems::{
    ConcreteDelegation, ConcreteLedger, ConcreteResolver, ConcreteVerifier, MeteredVerifier,
    RegistryContainer,
};
