use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, header::ORIGIN};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::warn;

use crate::error::ApiError;
use crate::metrics::RATE_LIMITED_TOTAL;
use crate::state::AppState;

// Client IP as seen by the trusting edge proxy
const CLIENT_IP_HEADER: &str = "cf-connecting-ip";
// Shared bucket for requests with no client IP header
const UNKNOWN_CLIENT: &str = "unknown";

// Front gate for every route: CORS preflight, origin enforcement, rate
// limiting, and CORS headers stamped onto whatever the inner router returns.
pub async fn edge_gate(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let cors_headers = state.origin_policy.response_headers(origin.as_deref());

    // preflight: answer immediately, empty body
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        response.headers_mut().extend(cors_headers);
        return response;
    }

    // only a present-but-disallowed Origin is rejected; header-less
    // requests (curl, server-to-server) fall through to rate limiting
    if let Some(origin) = origin.as_deref() {
        if !state.origin_policy.is_allowed(origin) {
            warn!(%origin, "rejected disallowed origin");
            let mut response = ApiError::OriginNotAllowed.into_response();
            response.headers_mut().extend(cors_headers);
            return response;
        }
    }

    let client_key = request
        .headers()
        .get(CLIENT_IP_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(UNKNOWN_CLIENT);

    if !state.rate_limiter.check_and_consume(client_key) {
        RATE_LIMITED_TOTAL.inc();
        warn!(client = client_key, "rate limit exceeded");
        let mut response = ApiError::RateLimited.into_response();
        response.headers_mut().extend(cors_headers);
        return response;
    }

    let mut response = next.run(request).await;
    response.headers_mut().extend(cors_headers);
    response
}
