//! Default fallback for unmapped paths.
//!
//! Answers every request with the configured status and plain-text body.

use axum::http::StatusCode;
use axum::Router;

use crate::config::FallbackConfig;

/// Build the router that serves requests with no redirect.
pub fn fallback_router(config: &FallbackConfig) -> Router {
    let status = StatusCode::from_u16(config.status).unwrap_or(StatusCode::NOT_FOUND);
    let body = config.body.clone();

    Router::new().fallback(move || {
        let body = body.clone();
        async move { (status, body) }
    })
}
