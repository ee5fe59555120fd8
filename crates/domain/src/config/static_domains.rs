use serde::{Deserialize, Serialize};

use crate::domain::ROOT_LABEL;
use crate::{Record, RecordKind};

/// Domain registered from the config file at startup
///
/// Static domains go through the same admission rules as domains added at
/// runtime and are never system domains, so they can be removed later.
///
/// ```toml
/// [[dns.domains]]
/// name = "site.test"
/// records = [
///     { label = "@", kind = "address", value = "10.0.0.5" },
///     { label = "www", kind = "address", value = "10.0.0.6" },
/// ]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticDomain {
    /// Registrable name (e.g., "site.test")
    pub name: String,

    #[serde(default)]
    pub records: Vec<StaticRecord>,
}

/// Record entry of a [`StaticDomain`]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticRecord {
    /// Subdomain label, "@" for the domain itself
    #[serde(default = "default_label")]
    pub label: String,

    pub kind: RecordKind,

    /// IP address for `address`, target name for `canonical_name` and
    /// `mail_exchange`, free text for `text`
    pub value: String,

    #[serde(default)]
    pub priority: Option<u16>,
}

impl StaticRecord {
    pub fn to_record(&self) -> Record {
        Record::new(self.kind, self.value.clone(), self.priority)
    }
}

fn default_label() -> String {
    ROOT_LABEL.to_string()
}
