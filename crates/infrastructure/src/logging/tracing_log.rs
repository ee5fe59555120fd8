use dattebayo_application::ports::EventLog;
use tracing::info;

/// Forwards every event to `tracing` at INFO level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventLog;

impl EventLog for TracingEventLog {
    fn log(&self, source: &str, message: &str) {
        info!(source, "{}", message);
    }
}
