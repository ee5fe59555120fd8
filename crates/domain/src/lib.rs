//! Dattebayo Domain Layer
//!
//! The built-in TLD allow-list ([`builtin::DEFAULT_TLDS`]) has 18 entries.
//! It is the historical 19-entry list with one profane TLD left out, so
//! names under that TLD are rejected unless it is added back through
//! `dns.tlds` in the configuration file.
pub mod builtin;
pub mod config;
pub mod dns_query;
pub mod domain;
pub mod errors;
pub mod record;
pub mod server_status;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{QueryKind, QueryName};
pub use domain::{Domain, ROOT_LABEL};
pub use errors::DomainError;
pub use record::{Record, RecordKind};
pub use server_status::ServerStatus;
