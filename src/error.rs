//! Service error types with HTTP status code mapping.
//!
//! [`RaffleError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 3001,
///     "message": "storage unavailable"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`RaffleError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category | HTTP Status               |
/// |-----------|----------|---------------------------|
/// | 3000–3999 | Server   | 500 Internal Server Error |
///
/// A taken number is not an error: stores report it as
/// [`crate::persistence::ReserveOutcome::Taken`].
#[derive(Debug, thiserror::Error)]
pub enum RaffleError {
    /// Startup configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Storage layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl RaffleError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Persistence(_) => 3001,
            Self::InvalidConfig(_) => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Persistence(_) | Self::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients.
    ///
    /// Variants carry driver or configuration detail that stays in the logs.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::Persistence(_) => "storage unavailable",
            Self::InvalidConfig(_) => "internal error",
        }
    }
}

impl From<sqlx::Error> for RaffleError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl IntoResponse for RaffleError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(error = %self, "request failed");
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.public_message().to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
