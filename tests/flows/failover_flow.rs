//! Failover Flow Tests
//!
//! Primary port busy → fallback port; both busy → start fails; stop frees
//! the port for a later start.

#[path = "../common/mod.rs"]
mod common;

use common::{free_udp_port, TestClient, TestServerBuilder};
use dattebayo_domain::{DomainError, Record, ServerStatus};
use hickory_proto::rr::RecordType;

#[tokio::test]
async fn test_falls_back_when_primary_is_taken() {
    let blocker = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
    let busy = blocker.local_addr().unwrap().port();
    let fallback = free_udp_port();

    let server = TestServerBuilder::new()
        .with_primary_port(busy)
        .with_fallback_port(fallback)
        .build()
        .await
        .expect("fallback port should be used");

    assert_eq!(server.port(), fallback);
    assert_eq!(server.dns.status(), ServerStatus::Running { port: fallback });
    assert!(server.logged(&format!("Falling back to port {}", fallback)));

    let domains = server.dns.domains();
    domains.add_domain("site.test", false).unwrap();
    domains
        .add_subdomain("site.test", "@", Record::address("10.0.0.5"))
        .unwrap();
    let answers = TestClient::new(server.addr())
        .query("site.test", RecordType::A)
        .await
        .unwrap();
    assert_eq!(answers.len(), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_both_ports_taken() {
    let primary = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
    let fallback = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
    let primary_port = primary.local_addr().unwrap().port();
    let fallback_port = fallback.local_addr().unwrap().port();

    let result = TestServerBuilder::new()
        .with_primary_port(primary_port)
        .with_fallback_port(fallback_port)
        .build()
        .await;

    assert_eq!(
        result.err(),
        Some(DomainError::BindFailed {
            primary: primary_port,
            fallback: fallback_port,
        })
    );
}

#[tokio::test]
async fn test_restart_after_stop_reuses_primary() {
    let primary = free_udp_port();
    let server = TestServerBuilder::new()
        .with_primary_port(primary)
        .build()
        .await
        .unwrap();
    assert_eq!(server.port(), primary);

    server.dns.stop().await;
    assert_eq!(server.dns.status(), ServerStatus::Stopped);

    let port = server.dns.start().await.unwrap();
    assert_eq!(port, primary);
    server.shutdown().await;
}
