use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

/// Failure modes surfaced by request handlers.
///
/// Every variant renders as `{"error": "<message>"}` so clients get one
/// error shape regardless of cause. A failed statement answers the request
/// with a 500 and leaves the process (and every other request) untouched.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A single statement failed; reported to the caller with the message.
    #[error("{0}")]
    Query(#[from] DbErr),
    /// The request body failed shape checks.
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::Value;

    #[tokio::test]
    async fn validation_errors_map_to_400_with_error_body() {
        let response = ApiError::Validation("responseTime must be non-negative".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "responseTime must be non-negative");
    }
}
