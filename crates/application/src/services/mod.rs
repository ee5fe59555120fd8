mod domain_service;
mod query_resolver;

pub use domain_service::DomainService;
pub use query_resolver::QueryResolver;

/// Source label attached to every event the resolver emits.
pub const LOG_SOURCE: &str = "DNS SERVER";
