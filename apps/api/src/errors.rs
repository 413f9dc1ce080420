use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type — the external taxonomy every adapter error
/// is translated into.
///
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Upstream detail strings are logged, never returned to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream timeout: {0}")]
    UpstreamTimeout(String),

    #[error("Upstream rate limited: {0}")]
    UpstreamRateLimited(String),

    #[error("Upstream auth failure: {0}")]
    UpstreamAuth(String),

    #[error("Upstream transport error: {0}")]
    UpstreamTransport(String),

    #[error("Upstream empty response: {0}")]
    UpstreamEmptyResponse(String),

    #[error("Upstream invalid schema: {0}")]
    UpstreamInvalidSchema(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::UpstreamTimeout(detail) => {
                tracing::error!("Upstream timeout: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An upstream service timed out. Please try again.".to_string(),
                )
            }
            AppError::UpstreamRateLimited(detail) => {
                tracing::error!("Upstream rate limited: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An upstream service is rate limiting requests. Please try again later."
                        .to_string(),
                )
            }
            AppError::UpstreamAuth(detail) => {
                tracing::error!("Upstream auth failure: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An upstream service rejected our credentials.".to_string(),
                )
            }
            AppError::UpstreamTransport(detail) => {
                tracing::error!("Upstream transport error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An upstream service could not be reached.".to_string(),
                )
            }
            AppError::UpstreamEmptyResponse(detail) => {
                tracing::error!("Upstream empty response: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An upstream service returned no content.".to_string(),
                )
            }
            AppError::UpstreamInvalidSchema(detail) => {
                tracing::error!("Upstream invalid schema: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An upstream service returned an unexpected response.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        // `success` mirrors the HTTP status in the body for UI convenience.
        let body = Json(json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("xHandle is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("no usable results".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_errors_map_to_500() {
        for err in [
            AppError::UpstreamTimeout("t".to_string()),
            AppError::UpstreamRateLimited("r".to_string()),
            AppError::UpstreamAuth("a".to_string()),
            AppError::UpstreamTransport("x".to_string()),
            AppError::UpstreamEmptyResponse("e".to_string()),
            AppError::UpstreamInvalidSchema("s".to_string()),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
