mod domain_registry;
mod event_log;

pub use domain_registry::DomainRegistry;
pub use event_log::EventLog;
