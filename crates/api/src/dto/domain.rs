use dattebayo_domain::{Domain, DomainError, Record, RecordKind};
use serde::{Deserialize, Serialize};

/// Response DTO for a registered domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainResponse {
    pub name: String,
    pub is_system: bool,
    pub records: Vec<RecordResponse>,
}

impl DomainResponse {
    pub fn from_domain(domain: Domain) -> Self {
        Self {
            name: domain.name,
            is_system: domain.is_system,
            records: domain
                .records
                .into_iter()
                .map(|(label, record)| RecordResponse::from_record(label, record))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub label: String,
    pub kind: RecordKind,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

impl RecordResponse {
    pub fn from_record(label: String, record: Record) -> Self {
        Self {
            label,
            kind: record.kind,
            value: record.value,
            priority: record.priority,
        }
    }
}

/// Request DTO for registering a domain
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDomainRequest {
    pub name: String,
}

/// Request DTO for storing a record under a label
///
/// `kind` accepts the snake_case names as well as `A`, `AAAA`, `CNAME`,
/// `MX` and `TXT`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertRecordRequest {
    pub kind: String,
    pub value: String,
    pub priority: Option<u16>,
}

impl UpsertRecordRequest {
    pub fn into_record(self) -> Result<Record, DomainError> {
        let kind: RecordKind = self.kind.parse()?;
        if self.value.trim().is_empty() {
            return Err(DomainError::InvalidRecord("value cannot be empty".to_string()));
        }
        let priority = match kind {
            RecordKind::MailExchange => Some(self.priority.unwrap_or(10)),
            _ => None,
        };
        Ok(Record::new(kind, self.value.trim(), priority))
    }
}
