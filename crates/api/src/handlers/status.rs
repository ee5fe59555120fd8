use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, instrument};

use crate::{
    dto::{StartResponse, StatusResponse},
    errors::error_response,
    state::AppState,
};

fn current_status(state: &AppState) -> StatusResponse {
    let settings = state.dns.settings();
    StatusResponse::new(
        state.dns.status(),
        settings.primary_port,
        settings.fallback_port,
    )
}

#[instrument(skip(state))]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(current_status(&state))
}

#[instrument(skip(state))]
pub async fn start_dns(
    State(state): State<AppState>,
) -> Result<Json<StartResponse>, (StatusCode, String)> {
    match state.dns.start().await {
        Ok(port) => Ok(Json(StartResponse { port })),
        Err(e) => {
            error!(error = %e, "DNS server start requested over API failed");
            Err(error_response(e))
        }
    }
}

#[instrument(skip(state))]
pub async fn stop_dns(State(state): State<AppState>) -> Json<StatusResponse> {
    state.dns.stop().await;
    Json(current_status(&state))
}
