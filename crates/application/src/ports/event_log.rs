/// Sink for human-readable diagnostic lines.
///
/// Every registry mutation and listener state change is reported as one
/// `(source, message)` pair. Implementations must not block for long; they
/// are called from the query path.
pub trait EventLog: Send + Sync {
    fn log(&self, source: &str, message: &str);
}
