use serde::Serialize;
use std::fmt;

/// Listener lifecycle as reported to administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ServerStatus {
    Stopped,
    Running { port: u16 },
}

impl ServerStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, ServerStatus::Running { .. })
    }

    pub fn port(&self) -> Option<u16> {
        match self {
            ServerStatus::Running { port } => Some(*port),
            ServerStatus::Stopped => None,
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerStatus::Running { port } => write!(f, "DNS Server is running on Port {}", port),
            ServerStatus::Stopped => f.write_str("DNS Server is not running"),
        }
    }
}
