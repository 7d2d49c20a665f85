//! HTTP route handlers.
//!
//! Only the connectivity probe is routed. Path matching is loose the way
//! classic web frameworks match by default: one trailing slash is ignored and
//! letters compare case-insensitively, so `/test/` and `/TEST` reach the probe
//! too. Everything else, including other methods on the probe path, gets a
//! plaintext 404.

pub mod probe;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use http::{Method, StatusCode, Uri};

use crate::config::PROBE_PATH;

/// 404 body for unrouted paths and unregistered methods.
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, String) {
    tracing::debug!(%method, path = %uri.path(), "No route");
    (
        StatusCode::NOT_FOUND,
        format!("Cannot {} {}", method, uri.path()),
    )
}

/// Router fallback: serves GET/HEAD on loose spellings of the probe path,
/// 404 for everything else.
pub async fn fallback(method: Method, uri: Uri) -> Response {
    let readable = method == Method::GET || method == Method::HEAD;
    if readable && probe::matches_path(uri.path()) {
        return probe::connected().await.into_response();
    }
    not_found(method, uri).await.into_response()
}

/// Creates the Axum router.
pub fn create_router() -> Router {
    // Method fallback keeps POST /test and friends at 404 instead of 405
    let probe_routes = Router::new().route(
        PROBE_PATH,
        get(probe::connected).fallback(not_found),
    );

    Router::new().merge(probe_routes).fallback(fallback)
}
