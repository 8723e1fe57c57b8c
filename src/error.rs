use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use common::{ErrorDetail, ErrorResponse, FieldViolation};
use compute::ComputeError;
use sea_orm::DbErr;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

/// Every way a request can fail, mapped to one status code and error code each.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more fields broke their rules
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// The request body could not be parsed at all
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The query string could not be parsed
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    /// Record with the given id does not exist; the payload names the entity
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("computation error: {0}")]
    Compute(#[from] ComputeError),
}

impl ApiError {
    /// Single rejected field.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        ApiError::Validation(vec![FieldViolation {
            field: field.to_string(),
            message: message.into(),
        }])
    }

    fn parts(&self) -> (StatusCode, &'static str, ErrorDetail) {
        match self {
            ApiError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                ErrorDetail::Violations(violations.clone()),
            ),
            ApiError::InvalidBody(message) => (
                StatusCode::BAD_REQUEST,
                "INVALID_BODY",
                ErrorDetail::Message(message.clone()),
            ),
            ApiError::InvalidQuery(message) => (
                StatusCode::BAD_REQUEST,
                "INVALID_QUERY",
                ErrorDetail::Message(message.clone()),
            ),
            ApiError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                ErrorDetail::Message(format!("{} not found", entity)),
            ),
            ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                ErrorDetail::Message("Failed to access the database".to_string()),
            ),
            ApiError::Compute(ComputeError::InvalidPeriod { month, year }) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                ErrorDetail::Violations(vec![FieldViolation {
                    field: "month".to_string(),
                    message: format!("Month {} of {} is not a valid period", month, year),
                }]),
            ),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = field.to_string();
                field_errors.iter().map(move |error| FieldViolation {
                    field: field.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", error.code)),
                })
            })
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        ApiError::Validation(violations)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(e) => error!("Request failed on storage: {}", e),
            ApiError::NotFound(entity) => warn!("{} not found", entity),
            other => warn!("Rejected request: {}", other),
        }

        let (status, code, error) = self.parts();
        let body = ErrorResponse {
            error,
            code: code.to_string(),
            success: false,
        };
        (status, Json(body)).into_response()
    }
}

/// Result type of every handler.
pub type ApiResult<T> = Result<T, ApiError>;
