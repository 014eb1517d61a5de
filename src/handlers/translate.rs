use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;
use std::time::Instant;
use tracing::error;

use crate::error::ApiError;
use crate::metrics::{PROVIDER_ERRORS_TOTAL, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{TranslateRequest, TranslationResponse};
use crate::provider::{SYSTEM_INSTRUCTION, TEMPERATURE, parse_translation};
use crate::state::AppState;

// POST /api/translate
pub async fn translate_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    REQUEST_TOTAL.inc();

    // a body we can't get a message out of is the client's problem,
    // whether the JSON is malformed or the field is missing
    let Ok(Json(request)) = payload else {
        return Err(ApiError::MissingMessage);
    };
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::MissingMessage);
    }

    let start_time = Instant::now();

    let content = state
        .provider
        .complete(SYSTEM_INSTRUCTION, message, TEMPERATURE)
        .await
        .map_err(|e| {
            PROVIDER_ERRORS_TOTAL.inc();
            error!(error = %e, "provider call failed");
            ApiError::Translation
        })?;

    let translation = parse_translation(&content).map_err(|e| {
        PROVIDER_ERRORS_TOTAL.inc();
        error!(error = %e, "provider returned invalid translation");
        ApiError::Translation
    })?;

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok(Json(translation))
}
