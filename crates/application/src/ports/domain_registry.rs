use dattebayo_domain::{Domain, DomainError, Record};
use std::collections::BTreeMap;

/// Authoritative store of domains and their records.
///
/// Implementations serialize writers against each other and never let a
/// reader observe a half-applied mutation. No method performs I/O.
pub trait DomainRegistry: Send + Sync {
    /// Registers an empty domain.
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidName` - If `name` has fewer than two labels or an empty one
    /// * `DomainError::UnsupportedTld` - If the TLD is not in the allow-list
    /// * `DomainError::AlreadyExists` - If the domain is already registered
    fn add_domain(&self, name: &str, is_system: bool) -> Result<(), DomainError>;

    /// Stores `record` under `label`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// * `DomainError::DomainNotFound` - If the domain is not registered
    fn add_subdomain(&self, domain: &str, label: &str, record: Record) -> Result<(), DomainError>;

    /// Deletes a domain together with all of its records.
    ///
    /// # Errors
    ///
    /// * `DomainError::DomainNotFound` - If the domain is not registered
    /// * `DomainError::SystemDomainProtected` - If the domain is a system domain
    fn remove_domain(&self, name: &str) -> Result<(), DomainError>;

    /// Deletes the record stored under one label.
    ///
    /// # Errors
    ///
    /// * `DomainError::DomainNotFound` - If the domain is not registered
    /// * `DomainError::SubdomainNotFound` - If nothing is stored under `label`
    fn remove_subdomain(&self, domain: &str, label: &str) -> Result<(), DomainError>;

    /// Point-in-time copy of every domain, keyed by name.
    fn list_domains(&self) -> BTreeMap<String, Domain>;

    /// Copy of a single domain, or `None` if it is not registered.
    fn get_domain(&self, name: &str) -> Option<Domain>;

    /// Record stored under `label` of `domain`.
    ///
    /// # Errors
    ///
    /// * `DomainError::DomainNotFound` - If the domain is not registered
    /// * `DomainError::SubdomainNotFound` - If nothing is stored under `label`
    fn lookup(&self, domain: &str, label: &str) -> Result<Record, DomainError>;

    fn is_supported_tld(&self, tld: &str) -> bool;

    fn supported_tlds(&self) -> Vec<String>;
}
