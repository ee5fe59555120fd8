use dattebayo_infrastructure::logging::LogEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct LogsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLineResponse {
    pub timestamp: String,
    pub source: String,
    pub message: String,
    pub line: String,
}

impl LogLineResponse {
    pub fn from_entry(entry: LogEntry) -> Self {
        Self {
            timestamp: entry.timestamp.to_rfc3339(),
            line: entry.format(),
            source: entry.source,
            message: entry.message,
        }
    }
}
