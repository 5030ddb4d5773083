//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain; every group is public (the dashboard has
//! no authentication surface).
//!
//! Route groups:
//! - `/metrics` → latest metrics sample with simulated drift
//! - `/logs` → recent log entries, plus log creation
//! - `/code-issues` → unresolved code issues
//! - `/system-status` → per-service status with drifted uptime
//! - `/health` → liveness probe
//! - `/summary` → aggregates across the whole store

use axum::Router;
use util::state::AppState;

pub mod code_issues;
pub mod health;
pub mod logs;
pub mod metrics;
pub mod summary;
pub mod system_status;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router is nested under `/api` by `main`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/metrics", metrics::metrics_routes())
        .nest("/logs", logs::logs_routes())
        .nest("/code-issues", code_issues::code_issues_routes())
        .nest("/system-status", system_status::system_status_routes())
        .nest("/health", health::health_routes())
        .nest("/summary", summary::summary_routes())
        .with_state(app_state)
}
