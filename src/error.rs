use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

// Every failure the gateway reports to a client. Provider and internal
// failures are collapsed into Translation before they get here; the full
// detail only ever goes to the server log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApiError {
    OriginNotAllowed,
    RateLimited,
    MissingMessage,
    NotFound,
    MethodNotAllowed,
    Translation,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::OriginNotAllowed => StatusCode::FORBIDDEN,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::MissingMessage => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Translation => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // User-facing text; the rate-limit and translation failures keep the
    // front-end's localized copy.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::OriginNotAllowed => "Origin not allowed",
            ApiError::RateLimited => "請求太頻繁了，前任都沒你這麼煩。請稍後再試。",
            ApiError::MissingMessage => "Missing required field: message",
            ApiError::NotFound => "Not found",
            ApiError::MethodNotAllowed => "Method not allowed",
            ApiError::Translation => "翻譯機過熱，可能是前任的怨念太深導致系統崩潰，請稍後再試。",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
