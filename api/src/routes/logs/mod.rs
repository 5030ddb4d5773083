//! # Logs Routes Module
//!
//! ## Structure
//! - `get.rs` — GET handlers (recent log listing)
//! - `post.rs` — POST handlers (log creation)
//! - `common.rs` — shared request types

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::list_logs;
use post::create_log;

/// Builds the `/logs` route group.
///
/// - `GET /logs?limit=N` → `list_logs`
/// - `POST /logs` → `create_log`
pub fn logs_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_logs))
        .route("/", post(create_log))
}
