//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_estate::EstateError;
use domain_will::{ErrorCategory, WillError};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body failed field-level checks before reaching the domain
    #[error("Invalid request")]
    InvalidInput(Vec<String>),

    /// The will domain refused the request
    #[error(transparent)]
    Will(#[from] WillError),

    #[error("Batch of {size} exceeds the limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ApiError {
    /// Status code and machine-readable error type
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
            ApiError::Will(e) => {
                let category = e.category();
                let status = match category {
                    ErrorCategory::IdFormat | ErrorCategory::EntityValidation => {
                        StatusCode::BAD_REQUEST
                    }
                    _ => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, category.code())
            }
            ApiError::BatchTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "batch_too_large"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status();

        let details = match &self {
            ApiError::InvalidInput(fields) => Some(fields.clone()),
            ApiError::Will(e @ WillError::Validation { .. }) => Some(e.messages()),
            _ => None,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<EstateError> for ApiError {
    fn from(err: EstateError) -> Self {
        ApiError::Will(WillError::from(err))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        let fields = err
            .to_string()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        ApiError::InvalidInput(fields)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::IdentityError;

    #[test]
    fn test_id_errors_are_bad_requests() {
        let err = ApiError::from(EstateError::from(IdentityError::WrongLength(5)));
        assert_eq!(err.status(), (StatusCode::BAD_REQUEST, "ID_FORMAT_ERROR"));
    }

    #[test]
    fn test_aggregate_errors_are_unprocessable() {
        let err = ApiError::from(WillError::GuardianRequired);
        assert_eq!(
            err.status(),
            (StatusCode::UNPROCESSABLE_ENTITY, "AGGREGATE_HARD_ERROR")
        );
    }

    #[test]
    fn test_validation_findings_are_unprocessable() {
        let err = ApiError::from(WillError::validation(vec!["bad".into()], vec![]));
        assert_eq!(err.status(), (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"));
    }

    #[test]
    fn test_batch_limit_message() {
        let err = ApiError::BatchTooLarge { size: 60, limit: 50 };
        assert_eq!(err.to_string(), "Batch of 60 exceeds the limit of 50");
        assert_eq!(err.status().0, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
