pub mod domain;
pub mod logs;
pub mod status;

pub use domain::{CreateDomainRequest, DomainResponse, RecordResponse, UpsertRecordRequest};
pub use logs::{LogLineResponse, LogsQuery};
pub use status::{StartResponse, StatusResponse};
