use axum::{
    Json,
    extract::{Query, State},
};
use db::models::log_entry::Model as LogModel;
use serde::Deserialize;
use util::state::AppState;

use crate::response::ApiError;

const DEFAULT_LIMIT: u64 = 30;

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub limit: Option<u64>,
}

/// GET /api/logs?limit=N
///
/// The `limit` most recent log entries, newest first (default 30). Every
/// column is returned.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// [
///   {
///     "id": 21,
///     "timestamp": "2026-08-06T12:00:00Z",
///     "level": "error",
///     "message": "Network timeout on external service",
///     "source": "worker/queue.js",
///     "responseTime": 412
///   }
/// ]
/// ```
pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<Vec<LogModel>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let rows = LogModel::recent(state.db(), limit).await?;
    Ok(Json(rows))
}
