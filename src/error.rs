// Error handling module for the Mover API
// Provides centralized error types and HTTP response conversion

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, warn};

use crate::movers::MoverError;

/// Main error type for the API
/// All handlers should return Result<T, ApiError>
///
/// Each variant maps to a specific HTTP status code and error response format.
#[derive(Debug)]
pub enum ApiError {
    /// Unparseable path identifier or request body
    /// Maps to HTTP 400 Bad Request
    MalformedInput(String),

    /// Validation errors from request validation
    /// Maps to HTTP 400 Bad Request
    ValidationError(validator::ValidationErrors),

    /// Resource not found by ID
    /// Maps to HTTP 404 Not Found
    NotFound { resource: String, id: String },

    /// Listing requested while the store holds nothing
    /// Maps to HTTP 404 Not Found
    EmptyCollection(String),

    /// Duplicate resource conflict
    /// Maps to HTTP 409 Conflict
    Conflict { message: String },

    /// Review rating outside the accepted range
    /// Maps to HTTP 417 Expectation Failed
    RangeError { message: String },
}

/// Consistent error response structure
///
/// Provides both a machine-readable `error_code` and a human-readable `message`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_code: String,

    pub message: String,

    /// Optional additional details (e.g., field-level validation errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    /// ISO 8601 timestamp of when the error occurred
    pub timestamp: String,
}

impl ErrorResponse {
    fn new(error_code: &str, message: String, details: Option<serde_json::Value>) -> Self {
        Self {
            error_code: error_code.to_string(),
            message,
            details,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = self.to_error_response();
        (status, Json(error_response)).into_response()
    }
}

impl ApiError {
    /// Convert ApiError to HTTP status code and ErrorResponse
    ///
    /// Logging levels:
    /// - debug!: expected client errors (malformed input, validation, not found)
    /// - warn!: rejected mutations (conflicts, out-of-range ratings)
    fn to_error_response(&self) -> (StatusCode, ErrorResponse) {
        let status = self.status_code();
        let response = match self {
            ApiError::MalformedInput(message) => {
                debug!("Malformed input: {}", message);
                ErrorResponse::new("MALFORMED_INPUT", message.clone(), None)
            }
            ApiError::ValidationError(errors) => {
                debug!("Validation error: {:?}", errors);
                ErrorResponse::new(
                    "VALIDATION_ERROR",
                    "Request validation failed".to_string(),
                    Some(serde_json::to_value(errors).unwrap_or(serde_json::json!({}))),
                )
            }
            ApiError::NotFound { resource, id } => {
                debug!("Resource not found: {} with id {}", resource, id);
                ErrorResponse::new(
                    "NOT_FOUND",
                    format!("{} with id {} not found", resource, id),
                    None,
                )
            }
            ApiError::EmptyCollection(message) => {
                debug!("Empty collection: {}", message);
                ErrorResponse::new("EMPTY_COLLECTION", message.clone(), None)
            }
            ApiError::Conflict { message } => {
                warn!("Conflict error: {}", message);
                ErrorResponse::new("CONFLICT", message.clone(), None)
            }
            ApiError::RangeError { message } => {
                warn!("Range error: {}", message);
                ErrorResponse::new("RATING_OUT_OF_RANGE", message.clone(), None)
            }
        };

        (status, response)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::EmptyCollection(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::RangeError { .. } => StatusCode::EXPECTATION_FAILED,
        }
    }
}

/// Convert core mover errors to ApiError
impl From<MoverError> for ApiError {
    fn from(err: MoverError) -> Self {
        match err {
            MoverError::NotFound(id) => ApiError::NotFound {
                resource: "Mover".to_string(),
                id: id.to_string(),
            },
            MoverError::AlreadyExists { .. }
            | MoverError::TelephoneNumberOccupied(_)
            | MoverError::JobCounterExhausted(_) => {
                ApiError::Conflict {
                    message: err.to_string(),
                }
            }
            MoverError::RatingOutOfRange(_) => ApiError::RangeError {
                message: err.to_string(),
            },
            MoverError::EmptyCollection => ApiError::EmptyCollection(err.to_string()),
            MoverError::Validation(errors) => ApiError::ValidationError(errors),
        }
    }
}

/// Any body the JSON extractor refuses is reported as invalid JSON
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected request body: {}", rejection.body_text());
        ApiError::MalformedInput("Invalid JSON".to_string())
    }
}

/// A path segment that does not parse as an id
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        debug!("Rejected path parameter: {}", rejection.body_text());
        ApiError::MalformedInput("Conversion error".to_string())
    }
}
