use axum::Router;
use dattebayo_api::{create_api_routes, AppState};
use std::future::Future;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serves the domain manager until `shutdown` completes.
pub async fn start_web_server<F>(
    addr: SocketAddr,
    state: AppState,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(bind_address = %addr, "Domain manager listening");

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
