use dattebayo_infrastructure::dns::DnsServer;
use dattebayo_infrastructure::logging::BufferedEventLog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dns: Arc<DnsServer>,
    pub events: Arc<BufferedEventLog>,
}
