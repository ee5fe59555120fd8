use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::{
    dto::{LogLineResponse, LogsQuery},
    state::AppState,
};

const DEFAULT_LIMIT: usize = 100;

pub async fn get_logs(
    State(state): State<AppState>,
    Query(params): Query<LogsQuery>,
) -> Json<Vec<LogLineResponse>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    Json(
        state
            .events
            .recent(limit)
            .into_iter()
            .map(LogLineResponse::from_entry)
            .collect(),
    )
}
