use serde::{Deserialize, Serialize};

use super::static_domains::StaticDomain;
use crate::builtin::default_tlds;

pub const DEFAULT_PRIMARY_PORT: u16 = 53;
pub const DEFAULT_FALLBACK_PORT: u16 = 53535;

/// DNS listener and namespace configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port tried first; 0 means the default (53)
    #[serde(default = "default_primary_port")]
    pub primary_port: u16,

    /// Port tried when the primary cannot be bound; 0 means the default (53535)
    #[serde(default = "default_fallback_port")]
    pub fallback_port: u16,

    /// TTL in seconds placed on every answer record
    #[serde(default = "default_answer_ttl")]
    pub answer_ttl: u32,

    /// How long startup waits for the listener to report a bound socket
    #[serde(default = "default_startup_timeout_ms")]
    pub startup_timeout_ms: u64,

    /// Top-level domains the resolver is authoritative for
    #[serde(default = "default_tlds")]
    pub tlds: Vec<String>,

    /// Domains registered at startup next to the built-in system domains
    #[serde(default)]
    pub domains: Vec<StaticDomain>,
}

impl DnsConfig {
    pub fn effective_primary_port(&self) -> u16 {
        non_zero_or(self.primary_port, DEFAULT_PRIMARY_PORT)
    }

    pub fn effective_fallback_port(&self) -> u16 {
        non_zero_or(self.fallback_port, DEFAULT_FALLBACK_PORT)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            primary_port: DEFAULT_PRIMARY_PORT,
            fallback_port: DEFAULT_FALLBACK_PORT,
            answer_ttl: default_answer_ttl(),
            startup_timeout_ms: default_startup_timeout_ms(),
            tlds: default_tlds(),
            domains: vec![],
        }
    }
}

fn non_zero_or(port: u16, default: u16) -> u16 {
    if port == 0 {
        default
    } else {
        port
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_primary_port() -> u16 {
    DEFAULT_PRIMARY_PORT
}

fn default_fallback_port() -> u16 {
    DEFAULT_FALLBACK_PORT
}

fn default_answer_ttl() -> u32 {
    60
}

fn default_startup_timeout_ms() -> u64 {
    500
}
