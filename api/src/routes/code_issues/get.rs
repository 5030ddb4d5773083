use axum::{Json, extract::State};
use db::models::code_issue::Model as CodeIssueModel;
use util::state::AppState;

use crate::response::ApiError;

/// GET /api/code-issues
///
/// Every issue with `resolved = false`, all columns.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// [
///   {
///     "id": 1,
///     "title": "N+1 query detected",
///     "file": "api/handlers.js",
///     "line": 124,
///     "severity": "error",
///     "description": "Optimize database queries",
///     "resolved": false
///   }
/// ]
/// ```
pub async fn list_code_issues(
    State(state): State<AppState>,
) -> Result<Json<Vec<CodeIssueModel>>, ApiError> {
    let rows = CodeIssueModel::unresolved(state.db()).await?;
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::super::code_issues_routes;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use db::models::code_issue::{ActiveModel, Model as CodeIssueModel};
    use db::test_utils::setup_test_db;
    use sea_orm::{ActiveModelTrait, ActiveValue::Set};
    use serde_json::Value;
    use tower::ServiceExt;
    use util::state::AppState;

    #[tokio::test]
    async fn resolved_issues_are_never_listed() {
        let db = setup_test_db().await;

        CodeIssueModel::create(&db, "N+1 query detected", "api/handlers.js", 124, "error", "Optimize database queries")
            .await
            .unwrap();
        let closed = CodeIssueModel::create(&db, "Memory leak in event listener", "utils/cache.js", 87, "warning", "Clean up event listeners properly")
            .await
            .unwrap();

        let mut fixed: ActiveModel = closed.into();
        fixed.resolved = Set(true);
        fixed.update(&db).await.unwrap();

        let app = Router::new()
            .nest("/api/code-issues", code_issues_routes())
            .with_state(AppState::new(db));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/code-issues")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();

        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["title"], "N+1 query detected");
        assert!(rows.iter().all(|r| r["resolved"] == false));
    }
}
