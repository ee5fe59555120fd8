use dattebayo_application::ports::EventLog;
use dattebayo_infrastructure::dns::DnsServer;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::error;

use crate::MAIN_SOURCE;

/// Starts the resolver in the background.
///
/// A failure to bind either port is reported and the process keeps running,
/// so the domain manager stays reachable.
pub fn start_dns_server(dns: Arc<DnsServer>, events: Arc<dyn EventLog>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match dns.start().await {
            Ok(port) => events.log(MAIN_SOURCE, &format!("DNS Server ready on port {}", port)),
            Err(e) => {
                error!(error = %e, "DNS server unavailable");
                events.log(MAIN_SOURCE, &format!("DNS Server unavailable: {}", e));
            }
        }
    })
}
