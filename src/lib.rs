pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod provider;
pub mod rate_limit;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

use crate::handlers::{
    health_handler, method_not_allowed_handler, metrics_handler, not_found_handler,
    translate_handler,
};
use crate::state::AppState;

// Full router: one API route plus health/metrics, everything wrapped by the
// edge gate (preflight, origin policy, rate limiting, CORS headers).
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route(
            "/api/translate",
            post(translate_handler).fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::edge_gate,
        ))
        .with_state(state)
}
