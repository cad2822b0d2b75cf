//! Bounds on extension-chain walks.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: usize = 32;
pub const DEFAULT_MAX_VISITED: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum hops from the starting address.
    pub max_depth: usize,
    /// Maximum distinct addresses expanded in one walk.
    pub max_visited: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_visited: DEFAULT_MAX_VISITED,
        }
    }
}
