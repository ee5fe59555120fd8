//! # Dattebayo
//!
//! Embeddable DNS resolver for private TLDs, with a small domain manager API.

mod bootstrap;
mod server;

use clap::{Parser, Subcommand};
use dattebayo_api::AppState;
use dattebayo_application::ports::EventLog;
use dattebayo_domain::CliOverrides;
use dattebayo_infrastructure::dns::DnsServer;
use dattebayo_infrastructure::logging::{BufferedEventLog, TracingEventLog};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

pub(crate) const MAIN_SOURCE: &str = "MAIN";

#[derive(Parser)]
#[command(name = "dattebayo")]
#[command(version)]
#[command(about = "A small DNS resolver for private top-level domains")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to the configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Primary DNS port
    #[arg(short = 'p', long)]
    primary_port: Option<u16>,

    /// Port tried when the primary port cannot be bound
    #[arg(short = 'f', long)]
    fallback_port: Option<u16>,

    /// DNS bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Domain manager port
    #[arg(long)]
    api_port: Option<u16>,

    /// Disable the domain manager API
    #[arg(long)]
    no_api: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default configuration file
    Init {
        #[arg(long, default_value = "dattebayo.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Init { path, force }) = cli.command {
        bootstrap::write_default_config(&path, force)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let overrides = CliOverrides {
        primary_port: cli.primary_port,
        fallback_port: cli.fallback_port,
        bind_address: cli.bind,
        api_port: cli.api_port,
        log_level: cli.log_level,
        no_api: cli.no_api,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config_summary(&config, cli.config.as_deref());

    // Only the domain manager reads the buffered feed.
    let events = Arc::new(BufferedEventLog::new());
    let event_log: Arc<dyn EventLog> = if config.domain_manager.enabled {
        events.clone()
    } else {
        Arc::new(TracingEventLog)
    };
    event_log.log(MAIN_SOURCE, "Starting Dattebayo");

    let dns = Arc::new(DnsServer::new(&config.dns, Arc::clone(&event_log))?);
    server::start_dns_server(Arc::clone(&dns), Arc::clone(&event_log));

    if config.domain_manager.enabled {
        let ip: IpAddr = config.domain_manager.bind_address.parse()?;
        let addr = SocketAddr::new(ip, config.domain_manager.port);
        let state = AppState {
            dns: Arc::clone(&dns),
            events,
        };
        event_log.log(MAIN_SOURCE, &format!("Domain manager on http://{}/api", addr));

        if let Err(e) = server::start_web_server(addr, state, shutdown_signal()).await {
            error!(error = %e, "Domain manager stopped with an error");
            shutdown_signal().await;
        }
    } else {
        shutdown_signal().await;
    }

    dns.stop().await;
    event_log.log(MAIN_SOURCE, "Shutdown complete");
    info!("Goodbye");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
}
