use axum::{
    extract::{ConnectInfo, Request},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::info;

/// Logs method, path and peer address for every request.
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Skip logging for preflight requests
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    info!(
        method = ?req.method(),
        path = %req.uri().path(),
        ip = %addr.ip(),
        "Incoming request"
    );

    Ok(next.run(req).await)
}
