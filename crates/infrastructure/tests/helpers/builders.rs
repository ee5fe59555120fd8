#![allow(dead_code)]
use dattebayo_application::ports::{DomainRegistry, EventLog};
use dattebayo_application::{DomainService, QueryResolver};
use dattebayo_domain::config::DnsConfig;
use dattebayo_infrastructure::logging::BufferedEventLog;
use dattebayo_infrastructure::registry::InMemoryDomainRegistry;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

/// Registry, logged CRUD service and resolver sharing one event log
pub struct ResolverFixture {
    pub registry: Arc<InMemoryDomainRegistry>,
    pub domains: DomainService,
    pub resolver: Arc<QueryResolver>,
    pub log: Arc<BufferedEventLog>,
}

impl ResolverFixture {
    pub fn new(tlds: &[&str]) -> Self {
        let registry = Arc::new(InMemoryDomainRegistry::new(tlds.iter().copied()));
        let log = Arc::new(BufferedEventLog::new());
        let domains = DomainService::new(
            registry.clone() as Arc<dyn DomainRegistry>,
            log.clone() as Arc<dyn EventLog>,
        );
        let resolver = Arc::new(QueryResolver::new(registry.clone(), log.clone()));
        Self {
            registry,
            domains,
            resolver,
            log,
        }
    }

    pub fn logged(&self, needle: &str) -> bool {
        self.log.entries().iter().any(|e| e.message.contains(needle))
    }
}

pub fn query_message(name: &str, record_type: RecordType) -> Message {
    query_message_with_op(name, record_type, OpCode::Query)
}

pub fn query_message_with_op(name: &str, record_type: RecordType, op_code: OpCode) -> Message {
    let mut query = Query::new();
    query.set_name(Name::from_str(name).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(fastrand::u16(..), MessageType::Query, op_code);
    message.set_recursion_desired(true);
    message.add_query(query);
    message
}

pub fn to_wire(message: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

/// Picks a port that is free right now on loopback
pub fn free_udp_port() -> u16 {
    let socket = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
    socket.local_addr().unwrap().port()
}

/// DNS config listening on loopback with the given ports
pub fn loopback_config(primary_port: u16, fallback_port: u16) -> DnsConfig {
    DnsConfig {
        bind_address: "127.0.0.1".to_string(),
        primary_port,
        fallback_port,
        tlds: vec!["test".to_string(), "internal".to_string(), "mail".to_string()],
        ..Default::default()
    }
}

pub async fn exchange(server: SocketAddr, message: &Message) -> Message {
    let client = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(&to_wire(message), server).await.unwrap();

    let mut buf = vec![0u8; 4096];
    let (len, _) = tokio::time::timeout(
        std::time::Duration::from_secs(2),
        client.recv_from(&mut buf),
    )
    .await
    .expect("no reply within 2s")
    .unwrap();

    Message::from_vec(&buf[..len]).unwrap()
}
