use super::handler::DnsRequestHandler;
use super::listener::serve_udp;
use crate::registry::InMemoryDomainRegistry;
use dattebayo_application::ports::{DomainRegistry, EventLog};
use dattebayo_application::{DomainService, QueryResolver, LOG_SOURCE};
use dattebayo_domain::config::DnsConfig;
use dattebayo_domain::{ConfigError, DomainError, ServerStatus};
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Listener settings resolved from [`DnsConfig`].
#[derive(Debug, Clone)]
pub struct DnsServerSettings {
    pub bind_address: IpAddr,
    pub primary_port: u16,
    pub fallback_port: u16,
    pub startup_timeout: Duration,
    pub answer_ttl: u32,
}

impl DnsServerSettings {
    pub fn from_config(config: &DnsConfig) -> Result<Self, ConfigError> {
        let bind_address = config.bind_address.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "dns.bind_address '{}' is not an IP address",
                config.bind_address
            ))
        })?;

        Ok(Self {
            bind_address,
            primary_port: config.effective_primary_port(),
            fallback_port: config.effective_fallback_port(),
            startup_timeout: Duration::from_millis(config.startup_timeout_ms),
            answer_ttl: config.answer_ttl,
        })
    }
}

struct RunningListener {
    port: u16,
    shutdown: CancellationToken,
    task: JoinHandle<()>,
}

/// The resolver service: owns the registry, answers queries and manages the
/// listener lifecycle.
///
/// Startup tries the primary port, then the fallback port. Each attempt
/// waits for the listener task to report its bind result, bounded by the
/// startup timeout. `stop` cancels the listener and waits for it to release
/// its socket.
pub struct DnsServer {
    settings: DnsServerSettings,
    domains: Arc<DomainService>,
    handler: Arc<DnsRequestHandler>,
    log: Arc<dyn EventLog>,
    listener: Mutex<Option<RunningListener>>,
    status: watch::Sender<ServerStatus>,
}

impl DnsServer {
    /// Builds the registry from the configured TLD allow-list and seeds it
    /// with the system domains and the configured static domains.
    pub fn new(config: &DnsConfig, log: Arc<dyn EventLog>) -> Result<Self, ConfigError> {
        let settings = DnsServerSettings::from_config(config)?;
        let registry: Arc<dyn DomainRegistry> =
            Arc::new(InMemoryDomainRegistry::new(&config.tlds));

        let domains = Arc::new(DomainService::new(Arc::clone(&registry), Arc::clone(&log)));
        domains.seed_system_domains();
        domains.seed_static_domains(&config.domains);

        let resolver = Arc::new(QueryResolver::new(registry, Arc::clone(&log)));
        let handler = Arc::new(DnsRequestHandler::new(resolver, settings.answer_ttl));

        let (status, _) = watch::channel(ServerStatus::Stopped);

        Ok(Self {
            settings,
            domains,
            handler,
            log,
            listener: Mutex::new(None),
            status,
        })
    }

    /// Registry CRUD surface.
    pub fn domains(&self) -> &Arc<DomainService> {
        &self.domains
    }

    pub fn settings(&self) -> &DnsServerSettings {
        &self.settings
    }

    pub fn status(&self) -> ServerStatus {
        *self.status.borrow()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<ServerStatus> {
        self.status.subscribe()
    }

    /// Starts listening on the primary port, falling back to the fallback
    /// port. Returns the bound port; starting a running server returns the
    /// port it already uses.
    ///
    /// # Errors
    ///
    /// * `DomainError::BindFailed` - If neither port could be bound
    pub async fn start(&self) -> Result<u16, DomainError> {
        let mut listener = self.listener.lock().await;
        if let Some(running) = listener.as_ref() {
            return Ok(running.port);
        }

        let primary = self.settings.primary_port;
        let fallback = self.settings.fallback_port;

        let running = match self.listen_on(primary).await {
            Ok(running) => running,
            Err(_) => {
                self.emit(format!("Falling back to port {}", fallback));
                match self.listen_on(fallback).await {
                    Ok(running) => running,
                    Err(_) => {
                        let err = DomainError::BindFailed { primary, fallback };
                        self.emit(err.to_string());
                        return Err(err);
                    }
                }
            }
        };

        let port = running.port;
        *listener = Some(running);
        self.status.send_replace(ServerStatus::Running { port });
        Ok(port)
    }

    /// Stops the listener and waits until its socket is released.
    pub async fn stop(&self) {
        let mut listener = self.listener.lock().await;
        let Some(running) = listener.take() else {
            return;
        };

        self.emit("Stopping DNS Server".to_string());
        running.shutdown.cancel();
        if let Err(e) = running.task.await {
            warn!(error = %e, port = running.port, "DNS listener task ended abnormally");
        }

        self.status.send_replace(ServerStatus::Stopped);
        info!(port = running.port, "DNS server stopped");
    }

    async fn listen_on(&self, port: u16) -> io::Result<RunningListener> {
        self.emit(format!("Attempting to start DNS Server on port {}", port));

        let addr = SocketAddr::new(self.settings.bind_address, port);
        let shutdown = CancellationToken::new();
        let (ready_tx, ready_rx) = oneshot::channel();
        let task = tokio::spawn(serve_udp(
            addr,
            Arc::clone(&self.handler),
            shutdown.clone(),
            ready_tx,
        ));

        let outcome = match tokio::time::timeout(self.settings.startup_timeout, ready_rx).await {
            Ok(Ok(bound)) => bound,
            Ok(Err(_)) => Err(io::Error::other(
                "listener exited before reporting readiness",
            )),
            Err(_) => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!(
                    "no readiness signal within {}ms",
                    self.settings.startup_timeout.as_millis()
                ),
            )),
        };

        match outcome {
            Ok(local_addr) => {
                let port = local_addr.port();
                self.emit(format!("DNS Server is now running on port {}", port));
                Ok(RunningListener {
                    port,
                    shutdown,
                    task,
                })
            }
            Err(e) => {
                shutdown.cancel();
                task.abort();
                self.emit(format!("Failed to start DNS Server on port {}: {}", port, e));
                Err(e)
            }
        }
    }

    fn emit(&self, message: String) {
        self.log.log(LOG_SOURCE, &message);
    }
}
