mod buffered;
mod tracing_log;

pub use buffered::{BufferedEventLog, LogEntry};
pub use tracing_log::TracingEventLog;
