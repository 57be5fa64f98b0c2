//! Error types for the gateway layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_members::MemberError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::DatabaseError(_) | GatewayError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing detail, without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            GatewayError::InvalidRequest(message)
            | GatewayError::NotFound(message)
            | GatewayError::DatabaseError(message)
            | GatewayError::InternalError(message) => message,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or(status.as_str())
                .to_string(),
            message: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<MemberError> for GatewayError {
    fn from(error: MemberError) -> Self {
        match error {
            MemberError::NotFound { .. } => GatewayError::NotFound("Member not found".to_string()),
            MemberError::Validation(message) => GatewayError::InvalidRequest(message),
            MemberError::Storage(source) => {
                // Driver details stay in the log.
                error!(error = %source, "member storage operation failed");
                GatewayError::DatabaseError("Storage operation failed".to_string())
            }
        }
    }
}
