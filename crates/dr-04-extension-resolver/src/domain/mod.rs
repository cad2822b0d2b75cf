//! # Domain Layer
//!
//! Walk bounds and the iterative chain search.

pub mod config;
pub mod errors;
pub mod walk;
