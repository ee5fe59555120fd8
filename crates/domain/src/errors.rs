use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidName(String),

    #[error("Unsupported TLD: {0}")]
    UnsupportedTld(String),

    #[error("Domain already exists: {0}")]
    AlreadyExists(String),

    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    #[error("Subdomain not found: {label} in {domain}")]
    SubdomainNotFound { domain: String, label: String },

    #[error("Cannot remove system domain: {0}")]
    SystemDomainProtected(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Failed to start DNS server on both primary ({primary}) and fallback ({fallback}) ports")]
    BindFailed { primary: u16, fallback: u16 },
}
