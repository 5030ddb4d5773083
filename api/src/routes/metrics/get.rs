use axum::{Json, extract::State};
use db::drift::{self, MetricReading};
use db::models::metric::Model as MetricModel;
use util::state::AppState;

use crate::response::ApiError;

/// GET /api/metrics
///
/// Drifts the most recent sample and persists the result as a new row; the
/// previous row is never overwritten. A store with no samples yet answers
/// with the fixed default reading and inserts nothing.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "cpu": 47.3, "memory": 63.1, "requests": 1278, "errors": 8 }
/// ```
pub async fn latest_metrics(
    State(state): State<AppState>,
) -> Result<Json<MetricReading>, ApiError> {
    let prev = MetricModel::latest(state.db()).await?;

    let reading = match prev {
        Some(prev) => {
            let next = drift::next_metrics(&mut rand::thread_rng(), &prev);
            MetricModel::create(state.db(), next.cpu, next.memory, next.requests, next.errors)
                .await?;
            next
        }
        None => drift::default_reading(),
    };

    Ok(Json(reading))
}
