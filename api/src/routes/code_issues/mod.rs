//! # Code Issues Routes Module
//!
//! `/api/code-issues` lists the static-analysis findings panel. Resolution
//! happens through an administrative path, so the read surface only ever
//! shows open issues.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::list_code_issues;

pub fn code_issues_routes() -> Router<AppState> {
    Router::new().route("/", get(list_code_issues))
}
