use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, instrument, warn};

use crate::{
    dto::{CreateDomainRequest, DomainResponse, UpsertRecordRequest},
    errors::error_response,
    state::AppState,
};

pub async fn list_domains(State(state): State<AppState>) -> Json<Vec<DomainResponse>> {
    let domains: Vec<DomainResponse> = state
        .dns
        .domains()
        .list_domains()
        .into_values()
        .map(DomainResponse::from_domain)
        .collect();
    debug!(count = domains.len(), "Domains retrieved");
    Json(domains)
}

pub async fn get_tlds(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dns.domains().supported_tlds())
}

pub async fn get_domain(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DomainResponse>, (StatusCode, String)> {
    match state.dns.domains().get_domain(&name) {
        Some(domain) => Ok(Json(DomainResponse::from_domain(domain))),
        None => Err((StatusCode::NOT_FOUND, format!("Domain not found: {}", name))),
    }
}

#[instrument(skip(state))]
pub async fn create_domain(
    State(state): State<AppState>,
    Json(req): Json<CreateDomainRequest>,
) -> Result<(StatusCode, Json<DomainResponse>), (StatusCode, String)> {
    let domains = state.dns.domains();
    if let Err(e) = domains.add_domain(&req.name, false) {
        warn!(error = %e, "Domain rejected");
        return Err(error_response(e));
    }

    match domains.get_domain(&req.name) {
        Some(domain) => Ok((StatusCode::CREATED, Json(DomainResponse::from_domain(domain)))),
        // Removed again between the insert and the read-back.
        None => Err((StatusCode::NOT_FOUND, format!("Domain not found: {}", req.name))),
    }
}

#[instrument(skip(state))]
pub async fn delete_domain(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .dns
        .domains()
        .remove_domain(&name)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(error_response)
}

#[instrument(skip(state, req))]
pub async fn upsert_record(
    State(state): State<AppState>,
    Path((name, label)): Path<(String, String)>,
    Json(req): Json<UpsertRecordRequest>,
) -> Result<Json<DomainResponse>, (StatusCode, String)> {
    let record = req.into_record().map_err(error_response)?;
    let domains = state.dns.domains();
    domains
        .add_subdomain(&name, &label, record)
        .map_err(error_response)?;

    domains
        .get_domain(&name)
        .map(|domain| Json(DomainResponse::from_domain(domain)))
        .ok_or((StatusCode::NOT_FOUND, format!("Domain not found: {}", name)))
}

#[instrument(skip(state))]
pub async fn delete_record(
    State(state): State<AppState>,
    Path((name, label)): Path<(String, String)>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .dns
        .domains()
        .remove_subdomain(&name, &label)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(error_response)
}
