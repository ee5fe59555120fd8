use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::get_status))
        .route("/dns/start", post(handlers::start_dns))
        .route("/dns/stop", post(handlers::stop_dns))
        .route("/tlds", get(handlers::get_tlds))
        .route(
            "/domains",
            get(handlers::list_domains).post(handlers::create_domain),
        )
        .route(
            "/domains/{name}",
            get(handlers::get_domain).delete(handlers::delete_domain),
        )
        .route(
            "/domains/{name}/records/{label}",
            put(handlers::upsert_record).delete(handlers::delete_record),
        )
        .route("/logs", get(handlers::get_logs))
        .with_state(state)
}
