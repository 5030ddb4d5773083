//! # System Status Routes Module
//!
//! `/api/system-status` reports per-service availability. Uptime figures are
//! drifted on the way out; the stored values are never mutated by reads.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::list_system_status;

pub fn system_status_routes() -> Router<AppState> {
    Router::new().route("/", get(list_system_status))
}
