use dattebayo_application::ports::DomainRegistry;
use dattebayo_domain::domain::{normalize, normalize_label};
use dattebayo_domain::{Domain, DomainError, Record};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Registry held entirely in memory for the lifetime of the process.
///
/// A single reader/writer lock covers the whole map of domains and every
/// domain's record map. Writers hold it for the full operation; lookups and
/// listings share it. The TLD allow-list is fixed at construction.
pub struct InMemoryDomainRegistry {
    tlds: HashSet<String>,
    domains: RwLock<HashMap<String, Domain>>,
}

impl InMemoryDomainRegistry {
    pub fn new<I, S>(tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tlds: tlds.into_iter().map(|tld| normalize(tld.as_ref())).collect(),
            domains: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave a map half-updated: every
    // mutation is a single insert or remove.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Domain>> {
        self.domains.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Domain>> {
        self.domains.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DomainRegistry for InMemoryDomainRegistry {
    fn add_domain(&self, name: &str, is_system: bool) -> Result<(), DomainError> {
        let (name, tld) = Domain::parse_name(name)?;
        if !self.tlds.contains(&tld) {
            return Err(DomainError::UnsupportedTld(tld));
        }

        let mut domains = self.write();
        if domains.contains_key(&name) {
            return Err(DomainError::AlreadyExists(name));
        }
        domains.insert(name.clone(), Domain::new(name, is_system));
        Ok(())
    }

    fn add_subdomain(&self, domain: &str, label: &str, record: Record) -> Result<(), DomainError> {
        let domain = normalize(domain);
        let mut domains = self.write();
        let entry = domains
            .get_mut(&domain)
            .ok_or(DomainError::DomainNotFound(domain.clone()))?;
        entry.records.insert(normalize_label(label), record);
        Ok(())
    }

    fn remove_domain(&self, name: &str) -> Result<(), DomainError> {
        let name = normalize(name);
        let mut domains = self.write();
        match domains.get(&name) {
            None => Err(DomainError::DomainNotFound(name)),
            Some(domain) if domain.is_system => Err(DomainError::SystemDomainProtected(name)),
            Some(_) => {
                domains.remove(&name);
                Ok(())
            }
        }
    }

    fn remove_subdomain(&self, domain: &str, label: &str) -> Result<(), DomainError> {
        let domain = normalize(domain);
        let label = normalize_label(label);
        let mut domains = self.write();
        let entry = domains
            .get_mut(&domain)
            .ok_or(DomainError::DomainNotFound(domain.clone()))?;
        match entry.records.remove(&label) {
            Some(_) => Ok(()),
            None => Err(DomainError::SubdomainNotFound { domain, label }),
        }
    }

    fn list_domains(&self) -> BTreeMap<String, Domain> {
        self.read()
            .iter()
            .map(|(name, domain)| (name.clone(), domain.clone()))
            .collect()
    }

    fn get_domain(&self, name: &str) -> Option<Domain> {
        self.read().get(&normalize(name)).cloned()
    }

    fn lookup(&self, domain: &str, label: &str) -> Result<Record, DomainError> {
        let domain = normalize(domain);
        let label = normalize_label(label);
        let domains = self.read();
        let entry = domains
            .get(&domain)
            .ok_or(DomainError::DomainNotFound(domain.clone()))?;
        match entry.record(&label) {
            Some(record) => Ok(record.clone()),
            None => Err(DomainError::SubdomainNotFound { domain, label }),
        }
    }

    fn is_supported_tld(&self, tld: &str) -> bool {
        self.tlds.contains(&normalize(tld))
    }

    fn supported_tlds(&self) -> Vec<String> {
        let mut tlds: Vec<String> = self.tlds.iter().cloned().collect();
        tlds.sort();
        tlds
    }
}
