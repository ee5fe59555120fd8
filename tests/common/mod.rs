#![allow(dead_code)]

mod fixtures;
mod test_client;
mod test_server;

pub use fixtures::{TestDomains, TestIps};
pub use test_client::TestClient;
pub use test_server::{free_udp_port, TestServer, TestServerBuilder};
