//! Error types for the posts API
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the posts API.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// No record matches the requested identifier
    #[error("Post not found: {0}")]
    NotFound(String),

    /// Required request parameter missing or empty
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Body rejected by the JSON extractor, keeping its status
    #[error("Invalid request: {message}")]
    Malformed { status: StatusCode, message: String },

    /// The store rejected a create or update
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Malformed { status, .. } => *status,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the posts API.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (ApiError::NotFound("7".into()), StatusCode::NOT_FOUND),
            (ApiError::InvalidRequest("post".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::Malformed {
                    status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    message: "no content type".into(),
                },
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (
                ApiError::Validation("title".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_error_message() {
        let err = ApiError::NotFound("42".to_string());
        assert_eq!(err.to_string(), "Post not found: 42");
    }
}
