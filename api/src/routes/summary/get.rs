use axum::{Json, extract::State};
use db::models::{LogEntry, Metric, log_entry};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait};
use serde::Serialize;
use util::state::AppState;

use crate::response::ApiError;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(rename = "totalRequests")]
    pub total_requests: i64,
    #[serde(rename = "totalErrors")]
    pub total_errors: i64,
    #[serde(rename = "avgCPU")]
    pub avg_cpu: f64,
    #[serde(rename = "avgMemory")]
    pub avg_memory: f64,
}

/// GET /api/summary
///
/// Headline aggregates over all stored rows: the request total and CPU /
/// memory means come from the metrics series; the error total counts log
/// entries with level exactly `"error"`. Averages are rounded to two
/// decimals; an empty store reports zeros.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "totalRequests": 14200, "totalErrors": 5, "avgCPU": 54.21, "avgMemory": 66.73 }
/// ```
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, ApiError> {
    // All aggregates read inside one transaction so they observe a single
    // snapshot of the store.
    let txn = state.db().begin().await?;

    let total_errors = LogEntry::find()
        .filter(log_entry::Column::Level.eq("error"))
        .count(&txn)
        .await? as i64;

    let metrics = Metric::find().all(&txn).await?;
    txn.commit().await?;

    let total_requests: i64 = metrics.iter().map(|m| m.requests).sum();
    let (avg_cpu, avg_memory) = if metrics.is_empty() {
        (0.0, 0.0)
    } else {
        let n = metrics.len() as f64;
        (
            round2(metrics.iter().map(|m| m.cpu).sum::<f64>() / n),
            round2(metrics.iter().map(|m| m.memory).sum::<f64>() / n),
        )
    };

    Ok(Json(SummaryResponse {
        total_requests,
        total_errors,
        avg_cpu,
        avg_memory,
    }))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::super::summary_routes;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use db::models::{log_entry, metric};
    use db::test_utils::setup_test_db;
    use sea_orm::DatabaseConnection;
    use serde_json::Value;
    use tower::ServiceExt;
    use util::state::AppState;

    async fn get_summary_json(db: DatabaseConnection) -> Value {
        let app = Router::new()
            .nest("/api/summary", summary_routes())
            .with_state(AppState::new(db));
        let response = app
            .oneshot(Request::builder().uri("/api/summary").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn empty_store_reports_zeros() {
        let db = setup_test_db().await;
        let json = get_summary_json(db).await;

        assert_eq!(json["totalRequests"], 0);
        assert_eq!(json["totalErrors"], 0);
        assert_eq!(json["avgCPU"], 0.0);
        assert_eq!(json["avgMemory"], 0.0);
    }

    #[tokio::test]
    async fn aggregates_match_stored_rows() {
        let db = setup_test_db().await;

        metric::Model::create(&db, 40.0, 60.0, 100, 1).await.unwrap();
        metric::Model::create(&db, 50.0, 70.0, 200, 2).await.unwrap();
        metric::Model::create(&db, 51.0, 71.0, 300, 3).await.unwrap();

        log_entry::Model::create(&db, "error", "boom", "services/auth.js", 10)
            .await
            .unwrap();
        log_entry::Model::create(&db, "error", "boom again", "worker/queue.js", 20)
            .await
            .unwrap();
        log_entry::Model::create(&db, "info", "fine", "api/handlers.js", 30)
            .await
            .unwrap();
        // Close but not equal: must not be counted.
        log_entry::Model::create(&db, "warning", "error-ish", "utils/cache.js", 40)
            .await
            .unwrap();

        let json = get_summary_json(db).await;

        assert_eq!(json["totalRequests"], 600);
        assert_eq!(json["totalErrors"], 2);
        assert_eq!(json["avgCPU"], 47.0);
        assert_eq!(json["avgMemory"], 67.0);
    }
}
