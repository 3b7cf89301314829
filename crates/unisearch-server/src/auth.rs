//! Pre-shared API key check
//!
//! Every request must carry the configured key in the `key` header.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::AppState;

pub const API_KEY_HEADER: &str = "key";

/// Authentication middleware
///
/// Missing header is a validation failure (422); a wrong key is 403.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = match request.headers().get(API_KEY_HEADER) {
        Some(value) => value.to_str().ok(),
        None => {
            tracing::warn!(path = %request.uri().path(), "Missing key header");
            return Err(ApiError::MissingApiKey);
        }
    };

    if provided == Some(state.api_key.as_ref()) {
        Ok(next.run(request).await)
    } else {
        tracing::warn!(path = %request.uri().path(), "Invalid API key attempted");
        Err(ApiError::InvalidApiKey)
    }
}
