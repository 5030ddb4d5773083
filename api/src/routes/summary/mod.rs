//! # Summary Routes Module
//!
//! `/api/summary` aggregates the whole store into the dashboard's headline
//! figures.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::get_summary;

pub fn summary_routes() -> Router<AppState> {
    Router::new().route("/", get(get_summary))
}
