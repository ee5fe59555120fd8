//! Configuration module for Dattebayo
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `dns`: Listener ports, answer TTL and the TLD allow-list
//! - `static_domains`: Domains registered from the config file
//! - `domain_manager`: Admin HTTP API settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod domain_manager;
pub mod errors;
pub mod logging;
pub mod root;
pub mod static_domains;

pub use dns::DnsConfig;
pub use domain_manager::DomainManagerConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use static_domains::{StaticDomain, StaticRecord};
