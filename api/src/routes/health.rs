use axum::{Json, Router, response::IntoResponse, routing::get};
use chrono::Utc;
use serde_json::json;
use util::state::AppState;

/// Builds the `/health` route group.
///
/// A single `GET /health` endpoint useful for uptime checks, load balancers,
/// or the dashboard's own connectivity indicator.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /api/health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "status": "ok", "timestamp": "2026-08-06T12:00:00+00:00" }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok", "timestamp": Utc::now().to_rfc3339() }))
}
