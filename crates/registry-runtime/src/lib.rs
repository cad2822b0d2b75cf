//! # Registry Runtime Library
//!
//! Configuration, wiring and the [`DaRegistry`] facade. The `main.rs` binary
//! drives it with JSON-lines commands.
//!
//! ## Modular Structure
//!
//! - `container/` - `RegistryConfig` and dependency injection
//! - `registry` - the public facade, metrics on every call
//! - `commands` - JSON-lines command protocol

pub mod commands;
pub mod container;
pub mod registry;

pub use commands::{execute, handle_line, Command, ErrorBody, Response};
pub use container::{ConfigError, RegistryConfig, RegistryContainer};
pub use registry::{DaRegistry, Eip712Domain, RegistryError};
