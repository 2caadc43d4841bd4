//! Error types with HTTP status code mapping.
//!
//! [`ApiError`] is the error type of the JSON endpoints. Each variant maps
//! to an HTTP status code and a `{status, message|error}` body.
//! [`StorageError`] is produced by the storage layer and carried inside
//! [`ApiError::Storage`] when it reaches a JSON route.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// Client and auth failures carry `message`, storage failures carry
/// `error`:
/// ```json
/// { "status": "not_ok", "message": "Missing required field: title_post" }
/// { "status": "not_ok", "error": "database is locked" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `"not_ok"`.
    pub status: String,
    /// Human-readable reason for 4xx responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Underlying failure for 5xx responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Persistence failure.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct StorageError(#[from] sqlx::Error);

/// Errors surfaced by the JSON endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing, empty or unparsable request input.
    #[error("{0}")]
    BadRequest(String),

    /// Privileged route requested without an admin session.
    #[error("Unauthorized")]
    Unauthorized,

    /// Admin password did not match.
    #[error("Invalid password")]
    InvalidCredentials,

    /// Persistence layer failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON body for this error.
    #[must_use]
    pub fn body(&self) -> ErrorResponse {
        let detail = self.to_string();
        match self {
            Self::Storage(_) => ErrorResponse {
                status: "not_ok".to_string(),
                message: None,
                error: Some(detail),
            },
            _ => ErrorResponse {
                status: "not_ok".to_string(),
                message: Some(detail),
                error: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Storage(err) = &self {
            tracing::error!(error = %err, "storage failure");
        }
        let mut response = axum::Json(self.body()).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        let storage = ApiError::from(StorageError::from(sqlx::Error::PoolClosed));
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn client_errors_carry_message() {
        let Ok(json) = serde_json::to_value(ApiError::InvalidCredentials.body()) else {
            panic!("serialization failed");
        };
        assert_eq!(json["status"], "not_ok");
        assert_eq!(json["message"], "Invalid password");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn storage_errors_carry_error_detail() {
        let err = ApiError::from(StorageError::from(sqlx::Error::PoolClosed));
        let Ok(json) = serde_json::to_value(err.body()) else {
            panic!("serialization failed");
        };
        assert_eq!(json["status"], "not_ok");
        assert!(json.get("message").is_none());
        assert_eq!(json["error"], sqlx::Error::PoolClosed.to_string());
    }
}
