pub mod handler;
pub mod listener;
pub mod record_type_map;
pub mod server;

pub use handler::DnsRequestHandler;
pub use server::{DnsServer, DnsServerSettings};
