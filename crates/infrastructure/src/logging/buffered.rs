use chrono::{DateTime, Local};
use dattebayo_application::ports::EventLog;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::info;

pub const DEFAULT_CAPACITY: usize = 1000;

/// One line of the event feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub source: String,
    pub message: String,
}

impl LogEntry {
    /// Renders `[HH:MM:SS] SOURCE: message`.
    pub fn format(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.timestamp.format("%H:%M:%S"),
            self.source,
            self.message
        )
    }
}

/// Event log that keeps the most recent entries in memory for a dashboard
/// while still forwarding everything to `tracing`.
pub struct BufferedEventLog {
    entries: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
}

impl BufferedEventLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity,
        }
    }

    /// Copy of the buffered entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    /// The last `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        let entries = self.lock();
        let skip = entries.len().saturating_sub(limit);
        entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BufferedEventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog for BufferedEventLog {
    fn log(&self, source: &str, message: &str) {
        info!(source, "{}", message);

        let entry = LogEntry {
            timestamp: Local::now(),
            source: source.to_string(),
            message: message.to_string(),
        };

        let mut entries = self.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }
}
