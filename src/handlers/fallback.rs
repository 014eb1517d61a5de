use crate::error::ApiError;

// anything other than POST on /api/translate
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}

// any unknown path
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
