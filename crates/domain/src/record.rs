use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Kind of data a stored record carries.
///
/// Only `Address` is ever matched against incoming queries. The other kinds
/// are stored and listed but never produce answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// IPv4 or IPv6 host mapping
    Address,
    /// Alias to another name
    CanonicalName,
    /// Mail exchanger (priority + target)
    MailExchange,
    /// Opaque text
    Text,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Address => "address",
            RecordKind::CanonicalName => "canonical_name",
            RecordKind::MailExchange => "mail_exchange",
            RecordKind::Text => "text",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "address" | "a" | "aaaa" => Ok(RecordKind::Address),
            "canonical_name" | "cname" => Ok(RecordKind::CanonicalName),
            "mail_exchange" | "mx" => Ok(RecordKind::MailExchange),
            "text" | "txt" => Ok(RecordKind::Text),
            other => Err(DomainError::InvalidRecord(format!(
                "unknown record kind '{}'",
                other
            ))),
        }
    }
}

/// A single resource stored under a subdomain label.
///
/// Records are immutable once stored; re-registering a label replaces the
/// whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub kind: RecordKind,
    pub value: String,
    /// Only meaningful for `MailExchange`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

impl Record {
    pub fn new(kind: RecordKind, value: impl Into<String>, priority: Option<u16>) -> Self {
        Self {
            kind,
            value: value.into(),
            priority,
        }
    }

    pub fn address(value: impl Into<String>) -> Self {
        Self::new(RecordKind::Address, value, None)
    }

    pub fn canonical_name(target: impl Into<String>) -> Self {
        Self::new(RecordKind::CanonicalName, target, None)
    }

    pub fn mail_exchange(priority: u16, target: impl Into<String>) -> Self {
        Self::new(RecordKind::MailExchange, target, Some(priority))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(RecordKind::Text, value, None)
    }
}
