//! Error types shared by the service, store and HTTP layers.
//!
//! [`StoreError`] is raised by repository implementations. [`AppError`] is what
//! services and handlers return; it renders as `{"error": "<message>"}` with the
//! matching HTTP status. Internal failures are logged and replaced by a generic
//! message so store details never reach the client.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Message returned for missing or blank identity fields.
pub const MISSING_FIELDS_MESSAGE: &str = "Both name and location are required";

/// Message returned when a business does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Business not found";

/// Message returned for every internal failure.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Application-level error returned by services and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed client input (400).
    #[error("{message}")]
    Validation { message: String },

    /// Referenced record does not exist (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Store or other unexpected failure (500). `message` is for operators only.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::Validation { message } => {
                tracing::debug!(%message, "rejected request");
                message.as_str()
            }
            AppError::NotFound { message } => message.as_str(),
            AppError::Internal { message } => {
                tracing::error!(error = %message, "request failed");
                INTERNAL_MESSAGE
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(_: ValidationErrors) -> Self {
        AppError::bad_request(MISSING_FIELDS_MESSAGE)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

/// Failure raised by a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or did not answer in time.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The record addressed by a write no longer exists.
    #[error("record not found")]
    NotFound,

    /// Any other store-side failure.
    #[error("store operation failed: {0}")]
    Backend(String),
}

/// SQLSTATE raised when `statement_timeout` cancels a query.
const QUERY_CANCELED: &str = "57014";

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => StoreError::Unavailable(e.to_string()),
            sqlx::Error::Database(db) if db.code().as_deref() == Some(QUERY_CANCELED) => {
                StoreError::Unavailable(e.to_string())
            }
            _ => StoreError::Backend(e.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => AppError::not_found(NOT_FOUND_MESSAGE),
            other => AppError::internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_renders_message() {
        let (status, body) = body_json(AppError::bad_request(MISSING_FIELDS_MESSAGE)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], MISSING_FIELDS_MESSAGE);
    }

    #[tokio::test]
    async fn test_not_found_renders_message() {
        let (status, body) = body_json(AppError::not_found(NOT_FOUND_MESSAGE)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Business not found");
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        let (status, body) =
            body_json(AppError::internal("connection refused on 10.0.0.5:5432")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_MESSAGE);
        assert!(!body.to_string().contains("10.0.0.5"));
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err: AppError = StoreError::NotFound.into();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_store_unavailable_maps_to_internal() {
        let err: AppError = StoreError::Unavailable("timeout".to_string()).into();
        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn test_row_not_found_is_backend() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Backend(_)));
    }
}
