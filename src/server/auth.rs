use crate::error::ApiError;
use crate::server::AppState;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// True iff the header is present and byte-for-byte equal to the configured secret.
/// With no secret configured nothing is authorized.
pub fn is_authorized(provided: Option<&[u8]>, expected: Option<&str>) -> bool {
    match (provided, expected) {
        (Some(provided), Some(expected)) => provided == expected.as_bytes(),
        _ => false,
    }
}

/// Middleware for the extraction routes. Runs before the multipart body is touched.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| value.as_bytes());

    if !is_authorized(provided, state.config.api_key()) {
        warn!(
            path = %request.uri().path(),
            header_present = provided.is_some(),
            "rejected request with missing or wrong API key"
        );
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
