use std::fmt;

use crate::domain::{normalize, ROOT_LABEL};
use crate::DomainError;

/// Record family a question asks for, as far as resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    A,
    Aaaa,
    /// Any other question type; never answered
    Other,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::A => f.write_str("A"),
            QueryKind::Aaaa => f.write_str("AAAA"),
            QueryKind::Other => f.write_str("OTHER"),
        }
    }
}

/// A query name split into TLD, registrable domain and subdomain label.
///
/// `www.api.site.test` splits into tld `test`, domain `site.test` and label
/// `www.api`; `site.test` gets the root label `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryName {
    pub tld: String,
    pub domain: String,
    pub label: String,
}

impl QueryName {
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let normalized = normalize(name);
        let labels: Vec<&str> = normalized.split('.').collect();

        if labels.len() < 2 {
            return Err(DomainError::InvalidName(name.to_string()));
        }

        let split = labels.len() - 2;
        let label = if split == 0 {
            ROOT_LABEL.to_string()
        } else {
            labels[..split].join(".")
        };

        Ok(Self {
            tld: labels[labels.len() - 1].to_string(),
            domain: labels[split..].join("."),
            label,
        })
    }
}
