use dattebayo_domain::builtin::{LOOPBACK_ADDRESS, SYSTEM_DOMAINS};
use dattebayo_domain::config::StaticDomain;
use dattebayo_domain::domain::{normalize, normalize_label};
use dattebayo_domain::{Domain, DomainError, Record};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::LOG_SOURCE;
use crate::ports::{DomainRegistry, EventLog};

/// Administrative surface over the registry.
///
/// Every mutation and every rejected request is reported to the event log,
/// and the error is handed back to the caller unchanged.
pub struct DomainService {
    registry: Arc<dyn DomainRegistry>,
    log: Arc<dyn EventLog>,
}

impl DomainService {
    pub fn new(registry: Arc<dyn DomainRegistry>, log: Arc<dyn EventLog>) -> Self {
        Self { registry, log }
    }

    #[instrument(skip(self))]
    pub fn add_domain(&self, name: &str, is_system: bool) -> Result<(), DomainError> {
        let result = self.registry.add_domain(name, is_system);
        self.report(result, || format!("Added Domain: {}", normalize(name)))
    }

    #[instrument(skip(self, record))]
    pub fn add_subdomain(&self, domain: &str, label: &str, record: Record) -> Result<(), DomainError> {
        let result = self.registry.add_subdomain(domain, label, record);
        self.report(result, || {
            format!(
                "Added Subdomain {} to Domain {}",
                normalize_label(label),
                normalize(domain)
            )
        })
    }

    #[instrument(skip(self))]
    pub fn remove_domain(&self, name: &str) -> Result<(), DomainError> {
        let result = self.registry.remove_domain(name);
        self.report(result, || format!("Removed Domain: {}", normalize(name)))
    }

    #[instrument(skip(self))]
    pub fn remove_subdomain(&self, domain: &str, label: &str) -> Result<(), DomainError> {
        let result = self.registry.remove_subdomain(domain, label);
        self.report(result, || {
            format!(
                "Removed Subdomain {} from Domain {}",
                normalize_label(label),
                normalize(domain)
            )
        })
    }

    pub fn list_domains(&self) -> BTreeMap<String, Domain> {
        self.registry.list_domains()
    }

    pub fn get_domain(&self, name: &str) -> Option<Domain> {
        self.registry.get_domain(name)
    }

    pub fn supported_tlds(&self) -> Vec<String> {
        self.registry.supported_tlds()
    }

    /// Registers the built-in system domains, each label pointing at the
    /// loopback address.
    pub fn seed_system_domains(&self) {
        for (name, labels) in SYSTEM_DOMAINS {
            if self.add_domain(name, true).is_err() {
                continue;
            }
            for label in labels.iter() {
                let _ = self.add_subdomain(name, label, Record::address(LOOPBACK_ADDRESS));
            }
        }
    }

    /// Registers domains declared in the configuration file.
    ///
    /// Failures are logged and skipped; a bad entry never stops startup.
    pub fn seed_static_domains(&self, domains: &[StaticDomain]) -> usize {
        let mut registered = 0;
        for domain in domains {
            if self.add_domain(&domain.name, false).is_err() {
                continue;
            }
            for record in &domain.records {
                let _ = self.add_subdomain(&domain.name, &record.label, record.to_record());
            }
            registered += 1;
        }
        debug!(registered, total = domains.len(), "Static domains registered");
        registered
    }

    fn report<F>(&self, result: Result<(), DomainError>, success: F) -> Result<(), DomainError>
    where
        F: FnOnce() -> String,
    {
        match &result {
            Ok(()) => self.log.log(LOG_SOURCE, &success()),
            Err(e) => self.log.log(LOG_SOURCE, &e.to_string()),
        }
        result
    }
}
