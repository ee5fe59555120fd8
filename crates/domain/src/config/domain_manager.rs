use serde::{Deserialize, Serialize};

/// Admin HTTP API ("domain manager") settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DomainManagerConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_enabled() -> bool {
    true
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8053
}

impl Default for DomainManagerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}
