use axum::{Json, extract::State};
use db::drift;
use db::models::service_status::Model as StatusModel;
use serde::Serialize;
use util::state::AppState;

use crate::response::ApiError;

#[derive(Debug, Serialize)]
pub struct ServiceStatusResponse {
    pub service: String,
    pub status: String,
    pub uptime: f64,
}

/// GET /api/system-status
///
/// Every monitored service with its uptime perturbed by at most ±0.05 and
/// rounded to one decimal. The drifted value is reported only; the stored
/// uptime stays as seeded.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// [
///   { "service": "API Server", "status": "online", "uptime": 99.9 },
///   { "service": "Database", "status": "online", "uptime": 99.8 }
/// ]
/// ```
pub async fn list_system_status(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceStatusResponse>>, ApiError> {
    let rows = StatusModel::all(state.db()).await?;

    let mut rng = rand::thread_rng();
    let payload = rows
        .into_iter()
        .map(|row| ServiceStatusResponse {
            uptime: drift::next_uptime(&mut rng, row.uptime),
            service: row.service,
            status: row.status,
        })
        .collect();

    Ok(Json(payload))
}
