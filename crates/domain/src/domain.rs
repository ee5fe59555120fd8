use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{DomainError, Record};

/// Label under which a domain's own root record is stored.
pub const ROOT_LABEL: &str = "@";

/// A registrable `label.tld` pair and the records stored under it.
///
/// Arbitrarily deep subdomains are not modelled as a tree: everything left of
/// the registrable pair is collapsed into one label key (`"a.b"` for
/// `a.b.site.test`), with `"@"` standing for the domain itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub records: BTreeMap<String, Record>,
    pub is_system: bool,
}

impl Domain {
    pub fn new(name: impl Into<String>, is_system: bool) -> Self {
        Self {
            name: name.into(),
            records: BTreeMap::new(),
            is_system,
        }
    }

    pub fn record(&self, label: &str) -> Option<&Record> {
        self.records.get(label)
    }

    /// Normalizes a registrable domain name and returns it with its TLD.
    ///
    /// Names are lowercased and a trailing dot is dropped. The result needs at
    /// least two labels, none of them empty; the last one is the TLD. Only
    /// `label.tld` names can be reached by queries, since a query's domain is
    /// always its last two labels.
    pub fn parse_name(name: &str) -> Result<(String, String), DomainError> {
        let normalized = normalize(name);
        let labels: Vec<&str> = normalized.split('.').collect();

        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
            return Err(DomainError::InvalidName(name.to_string()));
        }

        let tld = labels[labels.len() - 1].to_string();
        Ok((normalized, tld))
    }
}

/// Lowercases a name and strips one trailing dot.
pub fn normalize(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// Normalizes a subdomain label; an empty label means the domain root.
pub fn normalize_label(label: &str) -> String {
    let label = normalize(label);
    if label.is_empty() {
        ROOT_LABEL.to_string()
    } else {
        label
    }
}
