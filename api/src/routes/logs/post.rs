use axum::{Json, extract::State, http::StatusCode};
use db::models::log_entry::Model as LogModel;
use util::state::AppState;
use validator::Validate;

use crate::response::ApiError;
use crate::routes::logs::common::CreateLogRequest;

/// POST /api/logs
///
/// Inserts one log entry and answers with the stored row, including its
/// generated id and timestamp.
///
/// ### Request Body
/// ```json
/// { "level": "error", "message": "m", "source": "s", "responseTime": 12 }
/// ```
///
/// ### Response: 201 Created
///
/// ### Errors:
/// - 400 Bad Request — empty field or negative responseTime
pub async fn create_log(
    State(state): State<AppState>,
    Json(req): Json<CreateLogRequest>,
) -> Result<(StatusCode, Json<LogModel>), ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(format!("Validation failed: {e}")))?;

    let row = LogModel::create(
        state.db(),
        &req.level,
        &req.message,
        &req.source,
        req.response_time,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

#[cfg(test)]
mod tests {
    use super::super::logs_routes;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use db::test_utils::setup_test_db;
    use serde_json::Value;
    use tower::ServiceExt;
    use util::state::AppState;

    async fn test_app() -> Router {
        let db = setup_test_db().await;
        Router::new()
            .nest("/api/logs", logs_routes())
            .with_state(AppState::new(db))
    }

    fn post_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/logs")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn created_log_round_trips_as_most_recent() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(post_request(
                r#"{"level":"error","message":"m","source":"s","responseTime":12}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let created: Value = serde_json::from_slice(&body).unwrap();
        assert!(created["id"].as_i64().unwrap() > 0);
        assert_eq!(created["level"], "error");
        assert_eq!(created["responseTime"], 12);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/logs?limit=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let rows: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(rows.as_array().unwrap().len(), 1);
        assert_eq!(rows[0]["message"], "m");
        assert_eq!(rows[0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let app = test_app().await;

        let response = app
            .oneshot(post_request(
                r#"{"level":"info","message":"","source":"s","responseTime":5}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn negative_response_time_is_rejected() {
        let app = test_app().await;

        let response = app
            .oneshot(post_request(
                r#"{"level":"info","message":"m","source":"s","responseTime":-1}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
