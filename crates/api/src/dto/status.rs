use dattebayo_domain::ServerStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub running: bool,
    pub port: Option<u16>,
    pub primary_port: u16,
    pub fallback_port: u16,
    pub message: String,
}

impl StatusResponse {
    pub fn new(status: ServerStatus, primary_port: u16, fallback_port: u16) -> Self {
        Self {
            running: status.is_running(),
            port: status.port(),
            primary_port,
            fallback_port,
            message: status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartResponse {
    pub port: u16,
}
