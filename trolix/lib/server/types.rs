//! Type definitions for the server module.
//!
//! This module contains request and response types used by the REST API endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::TrolixError;

//-------------------------------------------------------------------------------------------------
// Types: Requests
//-------------------------------------------------------------------------------------------------

/// Request body for the /terminal/execute endpoint
#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    /// The sandbox to send the command to
    pub sandbox_id: String,

    /// The command line as typed
    pub command: String,
}

//-------------------------------------------------------------------------------------------------
// Types: Responses
//-------------------------------------------------------------------------------------------------

/// Response body for the /health endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "online"
    pub status: &'static str,

    /// The service name
    pub service: &'static str,
}

/// Response body for sandbox creation
#[derive(Debug, Serialize)]
pub struct CreateSandboxResponse {
    /// Human readable outcome
    pub message: String,

    /// Id of the new sandbox
    pub sandbox_id: String,
}

/// Response body for operations that only report an outcome
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human readable outcome
    pub message: String,
}

//-------------------------------------------------------------------------------------------------
// Types: Error Response
//-------------------------------------------------------------------------------------------------

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// HTTP status code
    pub code: u16,

    /// Error message
    pub detail: String,

    /// Error type for categorizing errors
    pub error_type: ErrorType,
}

/// Types of errors that can occur
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found
    NotFound,

    /// Internal server errors
    InternalError,
}

/// A handler error that renders as an [`ErrorResponse`]
#[derive(Debug)]
pub struct ApiError(pub TrolixError);

/// Type alias for the standard API response
pub type ApiResponse<T> = Result<Json<T>, ApiError>;

//-------------------------------------------------------------------------------------------------
// Methods
//-------------------------------------------------------------------------------------------------

impl HealthResponse {
    /// Creates the health response for the named service
    pub fn online(service: &'static str) -> Self {
        Self {
            status: "online",
            service,
        }
    }
}

impl MessageResponse {
    /// Create a new message response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(status: StatusCode, detail: impl Into<String>, error_type: ErrorType) -> Self {
        Self {
            code: status.as_u16(),
            detail: detail.into(),
            error_type,
        }
    }
}

//-------------------------------------------------------------------------------------------------
// Trait Implementations
//-------------------------------------------------------------------------------------------------

impl From<TrolixError> for ApiError {
    fn from(error: TrolixError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            TrolixError::SandboxNotFound(id) => {
                tracing::debug!("sandbox not found: {}", id);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(
                        StatusCode::NOT_FOUND,
                        "Sandbox not found",
                        ErrorType::NotFound,
                    ),
                )
            }
            error => {
                // Internal details stay in the log
                tracing::error!("request failed: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error",
                        ErrorType::InternalError,
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
