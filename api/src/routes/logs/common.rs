use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /api/logs`.
///
/// `level` is free text by design; shape checks only reject empty strings
/// and negative response times.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLogRequest {
    #[validate(length(min = 1, message = "level must not be empty"))]
    pub level: String,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
    #[validate(length(min = 1, message = "source must not be empty"))]
    pub source: String,
    #[validate(range(min = 0, message = "responseTime must be non-negative"))]
    #[serde(rename = "responseTime")]
    pub response_time: i64,
}
