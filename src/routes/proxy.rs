//! `/api` reverse proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls `/api/...` on the page's own origin. This handler
//! replays each request against `BACKEND_URL` with the path and query
//! unchanged, so `/api/v1/auth/login` becomes
//! `{BACKEND_URL}/api/v1/auth/login`.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable or timed-out backend yields `502` with the same
//! `{ success, message }` envelope the backend itself uses, so the client's
//! error normalization treats it like any other server failure.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

pub const BACKEND_UNAVAILABLE: &str = "Backend unavailable";

/// Headers that describe one hop and must not be replayed.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Join the backend origin with the incoming path and query.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{}{}", backend_url.trim_end_matches('/'), path_and_query)
}

pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy of `headers` without hop-by-hop entries, `Host`, or `Content-Length`.
/// The HTTP client sets the last two for the new connection.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| {
            !is_hop_by_hop(name) && *name != header::HOST && *name != header::CONTENT_LENGTH
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.config.backend_url, &uri);
    let result = state
        .http
        .request(method.clone(), &url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await;

    let upstream = match result {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "backend request failed");
            return bad_gateway();
        }
    };

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    match upstream.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%method, %url, status = status.as_u16(), "proxied");
            (status, response_headers, bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "backend response body failed");
            bad_gateway()
        }
    }
}

pub fn bad_gateway() -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "success": false, "message": BACKEND_UNAVAILABLE })),
    )
        .into_response()
}
