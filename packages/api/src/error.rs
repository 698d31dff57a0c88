//! Error taxonomy for the HTTP API.
//!
//! Every handler returns `Result<_, ApiError>`; the [`IntoResponse`]
//! implementation maps each variant to its status code and a JSON
//! `{"error": "..."}` body. Internal failures keep their details out of the
//! response and go to the log instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad input, e.g. empty task text.
    #[error("{0}")]
    Validation(String),

    /// No session cookie on the request.
    #[error("Not logged in")]
    Unauthenticated,

    /// Session cookie present but failed verification (bad signature,
    /// expired, malformed).
    #[error("Invalid session")]
    InvalidSession,

    /// Google ID token failed verification.
    #[error("Invalid Google token")]
    InvalidCredential,

    /// The target task does not exist for this owner.
    #[error("Task not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Fetching Google's signing keys failed.
    #[error(transparent)]
    Jwks(#[from] reqwest::Error),

    /// Signing the session credential failed.
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Unauthenticated | ApiError::InvalidSession | ApiError::InvalidCredential => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Database(e) => {
                tracing::error!("database error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            ApiError::Jwks(e) => {
                tracing::error!("failed to fetch Google signing keys: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            ApiError::Jwt(e) => {
                tracing::error!("token signing error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_expected_status_codes() {
        let cases = [
            (ApiError::Validation("Task text is required".into()), StatusCode::BAD_REQUEST),
            (ApiError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (ApiError::InvalidSession, StatusCode::UNAUTHORIZED),
            (ApiError::InvalidCredential, StatusCode::UNAUTHORIZED),
            (ApiError::NotFound, StatusCode::NOT_FOUND),
            (ApiError::Database(sqlx::Error::PoolClosed), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
