use dattebayo_domain::config::DnsConfig;
use dattebayo_domain::DomainError;
use dattebayo_infrastructure::dns::DnsServer;
use dattebayo_infrastructure::logging::BufferedEventLog;
use std::net::SocketAddr;
use std::sync::Arc;

/// Picks a port that is free right now on loopback
pub fn free_udp_port() -> u16 {
    let socket = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
    socket.local_addr().unwrap().port()
}

/// A started resolver on loopback
pub struct TestServer {
    pub dns: Arc<DnsServer>,
    pub events: Arc<BufferedEventLog>,
    port: u16,
}

impl TestServer {
    pub async fn start() -> Result<Self, DomainError> {
        TestServerBuilder::new().build().await
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], self.port))
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn logged(&self, needle: &str) -> bool {
        self.events
            .entries()
            .iter()
            .any(|e| e.message.contains(needle))
    }

    pub async fn shutdown(self) {
        self.dns.stop().await;
    }
}

pub struct TestServerBuilder {
    primary_port: Option<u16>,
    fallback_port: Option<u16>,
}

impl TestServerBuilder {
    pub fn new() -> Self {
        Self {
            primary_port: None,
            fallback_port: None,
        }
    }

    pub fn with_primary_port(mut self, port: u16) -> Self {
        self.primary_port = Some(port);
        self
    }

    pub fn with_fallback_port(mut self, port: u16) -> Self {
        self.fallback_port = Some(port);
        self
    }

    pub fn config(&self) -> DnsConfig {
        DnsConfig {
            bind_address: "127.0.0.1".to_string(),
            primary_port: self.primary_port.unwrap_or_else(free_udp_port),
            fallback_port: self.fallback_port.unwrap_or_else(free_udp_port),
            tlds: vec!["test".to_string(), "internal".to_string(), "mail".to_string()],
            ..Default::default()
        }
    }

    /// Builds the server and starts it.
    pub async fn build(self) -> Result<TestServer, DomainError> {
        let events = Arc::new(BufferedEventLog::new());
        let dns = Arc::new(DnsServer::new(&self.config(), events.clone()).unwrap());
        let port = dns.start().await?;
        Ok(TestServer { dns, events, port })
    }
}

impl Default for TestServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
