//! Resolution Flow Tests
//!
//! Register → query over UDP → answer, for every branch of name resolution.

#[path = "../common/mod.rs"]
mod common;

use common::{TestClient, TestDomains, TestIps, TestServer};
use dattebayo_domain::Record;
use hickory_proto::rr::RecordType;

async fn server_with_site() -> (TestServer, TestClient) {
    let server = TestServer::start().await.expect("Failed to start server");
    let domains = server.dns.domains();
    domains.add_domain(TestDomains::site(), false).unwrap();
    domains
        .add_subdomain(TestDomains::site(), "@", Record::address("10.0.0.5"))
        .unwrap();
    let client = TestClient::new(server.addr());
    (server, client)
}

#[tokio::test]
async fn test_apex_resolves() {
    let (server, client) = server_with_site().await;

    let answers = client.query(TestDomains::site(), RecordType::A).await.unwrap();

    assert_eq!(answers, vec![TestIps::site()]);
    assert!(server.logged("Received DNS Query for site.test"));
    assert!(server.logged("Responded to DNS Query for site.test"));
    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_label_has_no_answers() {
    let (server, client) = server_with_site().await;

    let answers = client.query(TestDomains::www(), RecordType::A).await.unwrap();

    assert!(answers.is_empty());
    assert!(server.logged("Subdomain not found: www"));
    server.shutdown().await;
}

#[tokio::test]
async fn test_unsupported_tld_has_no_answers() {
    let (server, client) = server_with_site().await;

    let answers = client
        .query(TestDomains::unsupported(), RecordType::A)
        .await
        .unwrap();

    assert!(answers.is_empty());
    assert!(server.logged("Unsupported TLD: bogus"));
    server.shutdown().await;
}

#[tokio::test]
async fn test_subdomain_add_then_remove() {
    let (server, client) = server_with_site().await;
    let domains = server.dns.domains();

    domains
        .add_subdomain(TestDomains::site(), "www", Record::address("10.0.0.6"))
        .unwrap();
    let answers = client.query(TestDomains::www(), RecordType::A).await.unwrap();
    assert_eq!(answers, vec![TestIps::www()]);

    domains.remove_subdomain(TestDomains::site(), "www").unwrap();
    let answers = client.query(TestDomains::www(), RecordType::A).await.unwrap();
    assert!(answers.is_empty());

    server.shutdown().await;
}

#[tokio::test]
async fn test_removed_domain_stops_resolving() {
    let (server, client) = server_with_site().await;

    server.dns.domains().remove_domain(TestDomains::site()).unwrap();

    let answers = client.query(TestDomains::site(), RecordType::A).await.unwrap();
    assert!(answers.is_empty());
    server.shutdown().await;
}

#[tokio::test]
async fn test_system_domains_resolve_to_loopback() {
    let server = TestServer::start().await.unwrap();
    let client = TestClient::new(server.addr());

    let apex = client
        .query(TestDomains::dashboard(), RecordType::A)
        .await
        .unwrap();
    let api = client
        .query(TestDomains::dashboard_api(), RecordType::A)
        .await
        .unwrap();

    assert_eq!(apex, vec![TestIps::loopback()]);
    assert_eq!(api, vec![TestIps::loopback()]);
    server.shutdown().await;
}

#[tokio::test]
async fn test_ipv6_record_answers_aaaa_only() {
    let server = TestServer::start().await.unwrap();
    let domains = server.dns.domains();
    domains.add_domain(TestDomains::site(), false).unwrap();
    domains
        .add_subdomain(TestDomains::site(), "@", Record::address("fd00::5"))
        .unwrap();
    let client = TestClient::new(server.addr());

    let aaaa = client
        .query(TestDomains::site(), RecordType::AAAA)
        .await
        .unwrap();
    let a = client.query(TestDomains::site(), RecordType::A).await.unwrap();

    assert_eq!(aaaa, vec![TestIps::site_v6()]);
    assert!(a.is_empty());
    server.shutdown().await;
}

#[tokio::test]
async fn test_reply_echoes_question_and_id() {
    let (server, client) = server_with_site().await;

    let reply = client
        .exchange("SITE.TEST.", RecordType::A)
        .await
        .unwrap();

    assert_eq!(reply.queries().len(), 1);
    assert_eq!(reply.answers().len(), 1);
    assert_eq!(reply.answers()[0].ttl(), 60);
    server.shutdown().await;
}
