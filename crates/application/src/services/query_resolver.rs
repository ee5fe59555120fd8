use dattebayo_domain::{DomainError, QueryKind, QueryName, RecordKind};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

use super::LOG_SOURCE;
use crate::ports::{DomainRegistry, EventLog};

/// Turns one question into zero or one address.
///
/// Misses are never errors: a malformed name, an unsupported TLD, an unknown
/// domain or label, a non-address record or a family mismatch all produce
/// `None` and a line in the event log.
pub struct QueryResolver {
    registry: Arc<dyn DomainRegistry>,
    log: Arc<dyn EventLog>,
}

impl QueryResolver {
    pub fn new(registry: Arc<dyn DomainRegistry>, log: Arc<dyn EventLog>) -> Self {
        Self { registry, log }
    }

    pub fn resolve(&self, name: &str, kind: QueryKind) -> Option<IpAddr> {
        self.log
            .log(LOG_SOURCE, &format!("Received DNS Query for {}", name));

        let query = match QueryName::parse(name) {
            Ok(query) => query,
            Err(_) => return self.miss(format!("Invalid domain name: {}", name)),
        };

        if !self.registry.is_supported_tld(&query.tld) {
            return self.miss(format!("Unsupported TLD: {}", query.tld));
        }

        let record = match self.registry.lookup(&query.domain, &query.label) {
            Ok(record) => record,
            Err(DomainError::SubdomainNotFound { label, .. }) => {
                return self.miss(format!("Subdomain not found: {}", label))
            }
            Err(e) => return self.miss(e.to_string()),
        };

        if record.kind != RecordKind::Address {
            return self.miss(format!(
                "No address record for {} (stored kind: {})",
                name, record.kind
            ));
        }

        let address: IpAddr = match record.value.parse() {
            Ok(address) => address,
            Err(_) => {
                return self.miss(format!(
                    "Failed to create address record for {}: invalid address '{}'",
                    name, record.value
                ))
            }
        };

        let matches_kind = matches!(
            (kind, address),
            (QueryKind::A, IpAddr::V4(_)) | (QueryKind::Aaaa, IpAddr::V6(_))
        );
        if !matches_kind {
            debug!(name, %kind, %address, "Question type does not match stored address");
            return self.miss(format!("No {} record for {}", kind, name));
        }

        self.log
            .log(LOG_SOURCE, &format!("Responded to DNS Query for {}", name));
        Some(address)
    }

    fn miss(&self, reason: String) -> Option<IpAddr> {
        self.log.log(LOG_SOURCE, &reason);
        None
    }
}
