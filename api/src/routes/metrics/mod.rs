//! # Metrics Routes Module
//!
//! `/api/metrics` serves the live-updating dashboard gauges. Each read
//! derives the next sample from the last stored one and appends it, so the
//! series advances with every poll.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::latest_metrics;

pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/", get(latest_metrics))
}
