//! Dattebayo Application Layer
//!
//! Ports the infrastructure implements and the services that hold the
//! registry policies and the query-name resolution algorithm.
pub mod ports;
pub mod services;

pub use services::{DomainService, QueryResolver, LOG_SOURCE};
