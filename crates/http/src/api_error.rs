//! Typed error for handlers that answer with a body instead of a redirect.
//!
//! Dashboard actions never use this: vendor failures land in the banner and
//! the handler redirects back to `/`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vantage_dash_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and returns a static message to
/// the client.
#[derive(Debug)]
pub enum ApiError {
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Internal(err.into())
    }
}
