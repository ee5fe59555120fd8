use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;

use super::{ConfigError, DnsConfig, DomainManagerConfig, LoggingConfig};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub domain_manager: DomainManagerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; each one wins over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub primary_port: Option<u16>,
    pub fallback_port: Option<u16>,
    pub bind_address: Option<String>,
    pub api_port: Option<u16>,
    pub log_level: Option<String>,
    pub no_api: bool,
}

impl Config {
    /// Loads the configuration file (or defaults when no path is given) and
    /// applies the command-line overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.primary_port {
            self.dns.primary_port = port;
        }
        if let Some(port) = overrides.fallback_port {
            self.dns.fallback_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.dns.bind_address = bind;
        }
        if let Some(port) = overrides.api_port {
            self.domain_manager.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.no_api {
            self.domain_manager.enabled = false;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.tlds.is_empty() {
            return Err(ConfigError::Validation(
                "dns.tlds must contain at least one TLD".to_string(),
            ));
        }

        for tld in &self.dns.tlds {
            if tld.is_empty() || tld.contains('.') || *tld != tld.to_ascii_lowercase() {
                return Err(ConfigError::Validation(format!(
                    "dns.tlds entry '{}' must be a single lowercase label",
                    tld
                )));
            }
        }

        for (field, address) in [
            ("dns.bind_address", &self.dns.bind_address),
            ("domain_manager.bind_address", &self.domain_manager.bind_address),
        ] {
            if address.parse::<IpAddr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "{} '{}' is not an IP address",
                    field, address
                )));
            }
        }

        if self.dns.startup_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "dns.startup_timeout_ms must be greater than zero".to_string(),
            ));
        }

        if !self.logging.is_known_level() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }

        Ok(())
    }
}
