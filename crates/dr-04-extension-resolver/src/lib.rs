//! # Extension Resolver Subsystem (DR-04)
//!
//! Lets an address inherit another address's submission history at read time.
//!
//! ## Resolution Rules
//!
//! 1. An address's own records always win (direct-record shadowing).
//! 2. Otherwise its extension edges are tried most recently declared first,
//!    each searched depth-first before the next.
//! 3. The walk is iterative, skips addresses already expanded, and fails with
//!    [`ResolveError::ChainTooDeep`] past `max_depth` hops or `max_visited`
//!    addresses.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::config::{ResolverConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_VISITED};
pub use domain::errors::ResolveError;
pub use domain::walk::{ChainWalker, Resolution};
pub use ports::inbound::ExtensionResolverApi;
pub use service::ExtensionResolver;
