//! # API Errors
//!
//! Every handler failure is an [`ApiError`]; the response body is always
//! `{"detail": "..."}`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository::RepositoryError;
use crate::schema::ValidationError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Handler errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body does not match the expected view
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Body, path or query could not be parsed at all
    #[error("{0}")]
    BadRequest(String),

    /// No hero with the requested id
    #[error("Hero not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure; the cause is logged, never returned
    #[error("Internal server error")]
    Storage(#[source] sqlx::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ApiError::NotFound,
            RepositoryError::Storage(e) => ApiError::Storage(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Storage(cause) => tracing::error!(error = %cause, "storage failure"),
            other => tracing::debug!(status = status.as_u16(), error = %other, "request rejected"),
        }
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(ValidationError::missing_field("name")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BadRequest("bad json".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Storage(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_error_mapping() {
        assert!(matches!(
            ApiError::from(RepositoryError::NotFound),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(RepositoryError::Storage(sqlx::Error::PoolClosed)),
            ApiError::Storage(_)
        ));
    }

    #[test]
    fn test_storage_detail_is_opaque() {
        let err = ApiError::Storage(sqlx::Error::Protocol("disk image is malformed".into()));
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_not_found_detail() {
        let body = ErrorResponse {
            detail: ApiError::NotFound.to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"detail":"Hero not found"}"#
        );
    }
}
