// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::ValidationResult;
use crate::auth::token::TokenError;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    PayloadTooLarge(String),
    InternalServer(String),
    DatabaseError(sqlx::Error),
    ValidationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::PayloadTooLarge(msg) => write!(f, "Payload Too Large: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::DatabaseError(e) => write!(f, "Database Error: {}", e),
            ApiError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServer(_) | ApiError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let (error_message, code) = match self {
            ApiError::Unauthorized(msg) => (msg, "UNAUTHORIZED"),
            ApiError::BadRequest(msg) => (msg, "BAD_REQUEST"),
            ApiError::NotFound(msg) => (msg, "NOT_FOUND"),
            ApiError::Conflict(msg) => (msg, "CONFLICT"),
            ApiError::PayloadTooLarge(msg) => (msg, "PAYLOAD_TOO_LARGE"),
            ApiError::InternalServer(msg) => (msg, "INTERNAL_SERVER_ERROR"),
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                ("Database operation failed".to_string(), "DATABASE_ERROR")
            }
            ApiError::ValidationError(msg) => (msg, "VALIDATION_ERROR"),
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::DatabaseError(e)
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Encoding(inner) => {
                error!(error = %inner, "JWT encoding failed");
                ApiError::InternalServer("jwt error".to_string())
            }
            TokenError::ExpiryOutOfRange => {
                error!("JWT expiry overflowed the supported date range");
                ApiError::InternalServer("jwt error".to_string())
            }
            TokenError::EmptySubject => {
                ApiError::InternalServer("cannot issue a token without a user id".to_string())
            }
            TokenError::Invalid(_) => ApiError::Unauthorized("invalid token".to_string()),
        }
    }
}

/// Helper function to convert ValidationResult to ApiError
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            let error_messages: Vec<String> = result
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            ApiError::ValidationError(error_messages.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_of(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status_and_code_mapping() {
        let cases = [
            (ApiError::Unauthorized("u".into()), StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            (ApiError::BadRequest("b".into()), StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            (ApiError::NotFound("n".into()), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (ApiError::Conflict("c".into()), StatusCode::CONFLICT, "CONFLICT"),
            (
                ApiError::PayloadTooLarge("p".into()),
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
            ),
            (
                ApiError::InternalServer("i".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
            ),
            (
                ApiError::ValidationError("v".into()),
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
            ),
        ];

        for (err, status, code) in cases {
            let message = match &err {
                ApiError::Unauthorized(m)
                | ApiError::BadRequest(m)
                | ApiError::NotFound(m)
                | ApiError::Conflict(m)
                | ApiError::PayloadTooLarge(m)
                | ApiError::InternalServer(m)
                | ApiError::ValidationError(m) => m.clone(),
                ApiError::DatabaseError(_) => unreachable!(),
            };
            let (actual, body) = body_of(err).await;
            assert_eq!(actual, status);
            assert_eq!(body["code"], code);
            assert_eq!(body["error"], message);
        }
    }

    #[tokio::test]
    async fn test_database_error_text_is_masked() {
        let (status, body) = body_of(ApiError::DatabaseError(sqlx::Error::Protocol(
            "secret table users leaked".to_string(),
        )))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "DATABASE_ERROR");
        assert_eq!(body["error"], "Database operation failed");
    }
}
