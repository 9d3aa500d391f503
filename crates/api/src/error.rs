//! Unified error handling for the API.
//!
//! Every error renders as `{"error": <message>}` with its status code, so
//! clients see one shape regardless of where the failure happened.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Database operation failed.
    #[error(transparent)]
    Database(RepositoryError),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("{0}")]
    BadRequest(String),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound("product not found".to_string()),
            other => Self::Database(other),
        }
    }
}

/// JSON error payload: `{"error": <message>}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Database(_)) {
            tracing::error!(error = %self, "request failed");
        }

        let status = match &self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // The store's error text is surfaced directly; acceptable for an
        // internal/dev-facing service.
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            get_status(ApiError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ApiError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::Database(RepositoryError::Database(
                sqlx::Error::PoolClosed
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let err: ApiError = RepositoryError::NotFound.into();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "product not found");
    }

    #[test]
    fn test_repository_failure_maps_to_500() {
        let err: ApiError = RepositoryError::Database(sqlx::Error::PoolClosed).into();
        assert!(matches!(err, ApiError::Database(_)));
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::NotFound("product not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, serde_json::json!({"error": "product not found"}));
    }

    #[tokio::test]
    async fn test_database_error_surfaces_text() {
        let response =
            ApiError::Database(RepositoryError::Database(sqlx::Error::PoolClosed)).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let message = value.get("error").and_then(|v| v.as_str()).unwrap();
        assert!(message.starts_with("database error:"));
    }
}
