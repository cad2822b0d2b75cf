//! # Registry Configuration
//!
//! Unified configuration for the signing domain, the resolver bounds and the
//! event bus.
//!
//! ## Security Requirements
//!
//! - `verifying_contract` MUST be set; the zero address would let signatures
//!   be replayed against any instance that also left it unset
//! - Resolver bounds have sane defaults with override capability

use dr_03_delegation::DomainConfig;
use dr_04_extension_resolver::{ResolverConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_VISITED};
use shared_bus::DEFAULT_CHANNEL_CAPACITY;
use shared_types::{parse_fixed, Address, ZERO_ADDRESS, U256};
use thiserror::Error;

pub const DEFAULT_DOMAIN_NAME: &str = "DaPointerRegistry";
pub const DEFAULT_DOMAIN_VERSION: &str = "1";
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Complete registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// EIP-712 signing domain.
    pub domain: DomainConfig,
    /// Extension chain walk bounds.
    pub resolver: ResolverConfig,
    /// Per-subscriber buffer of the event bus.
    pub event_bus_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            domain: DomainConfig::new(
                DEFAULT_DOMAIN_NAME,
                DEFAULT_DOMAIN_VERSION,
                DEFAULT_CHAIN_ID,
                ZERO_ADDRESS,
            ),
            resolver: ResolverConfig::default(),
            event_bus_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl RegistryConfig {
    /// Defaults bound to `verifying_contract`.
    pub fn with_verifying_contract(verifying_contract: Address) -> Self {
        let mut config = Self::default();
        config.domain.verifying_contract = verifying_contract;
        config
    }

    /// Load configuration from environment variables.
    ///
    /// - `DR_DOMAIN_NAME` (default: DaPointerRegistry)
    /// - `DR_DOMAIN_VERSION` (default: 1)
    /// - `DR_CHAIN_ID`: decimal or `0x` hex (default: 1)
    /// - `DR_VERIFYING_CONTRACT`: 20-byte hex address (no default)
    /// - `DR_RESOLVER_MAX_DEPTH` (default: 32)
    /// - `DR_RESOLVER_MAX_VISITED` (default: 1024)
    /// - `DR_EVENT_BUS_CAPACITY` (default: 1000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`Self::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("DR_DOMAIN_NAME") {
            config.domain.name = name;
        }
        if let Some(version) = lookup("DR_DOMAIN_VERSION") {
            config.domain.version = version;
        }
        if let Some(raw) = lookup("DR_CHAIN_ID") {
            config.domain.chain_id = parse_chain_id(&raw)?;
        }
        if let Some(raw) = lookup("DR_VERIFYING_CONTRACT") {
            config.domain.verifying_contract =
                parse_fixed::<20>(raw.trim()).map_err(|e| ConfigError::Invalid {
                    key: "DR_VERIFYING_CONTRACT",
                    reason: e.to_string(),
                })?;
        }
        config.resolver.max_depth =
            parse_usize(&lookup, "DR_RESOLVER_MAX_DEPTH", DEFAULT_MAX_DEPTH)?;
        config.resolver.max_visited =
            parse_usize(&lookup, "DR_RESOLVER_MAX_VISITED", DEFAULT_MAX_VISITED)?;
        config.event_bus_capacity =
            parse_usize(&lookup, "DR_EVENT_BUS_CAPACITY", DEFAULT_CHANNEL_CAPACITY)?;

        Ok(config)
    }

    /// Validate configuration before wiring.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - the verifying contract is the zero address
    /// - the domain name or version is empty
    /// - a resolver bound or the bus capacity is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domain.verifying_contract == ZERO_ADDRESS {
            return Err(ConfigError::MissingVerifyingContract);
        }
        if self.domain.name.is_empty() {
            return Err(ConfigError::EmptyField("domain.name"));
        }
        if self.domain.version.is_empty() {
            return Err(ConfigError::EmptyField("domain.version"));
        }
        if self.resolver.max_depth == 0 {
            return Err(ConfigError::ZeroBound("resolver.max_depth"));
        }
        if self.resolver.max_visited == 0 {
            return Err(ConfigError::ZeroBound("resolver.max_visited"));
        }
        if self.event_bus_capacity == 0 {
            return Err(ConfigError::ZeroBound("event_bus_capacity"));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("verifying contract is the zero address; set DR_VERIFYING_CONTRACT")]
    MissingVerifyingContract,

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("{0} must be greater than zero")]
    ZeroBound(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

fn parse_chain_id(raw: &str) -> Result<U256, ConfigError> {
    let raw = raw.trim();
    let parsed = match raw.strip_prefix("0x") {
        Some(hex) => U256::from_str_radix(hex, 16).map_err(|e| e.to_string()),
        None => U256::from_dec_str(raw).map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| ConfigError::Invalid {
        key: "DR_CHAIN_ID",
        reason,
    })
}

fn parse_usize<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: std::num::ParseIntError| {
            ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }
        }),
        None => Ok(default),
    }
}
