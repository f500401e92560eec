//! Structured error payloads shared by the HTTP and GraphQL surfaces.
//!
//! Every client-visible failure carries
//! `{statusCode, timestamp, path, method, message, details?}`. Task service
//! errors map onto that shape as follows:
//!
//! | Service error | Status | Code |
//! |---|---|---|
//! | `InvalidInput` | 400 | `BAD_REQUEST` |
//! | `NotFound` | 404 | `NOT_FOUND` |
//! | `Internal` | 500 | `INTERNAL_SERVER_ERROR` |
//!
//! Internal errors are logged in full and reported with a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::task::services::TaskServiceError;

/// Message returned in place of internal failure details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// HTTP request coordinates attached to error payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Request path.
    pub path: String,
    /// Request method.
    pub method: String,
}

impl RequestContext {
    /// Creates a request context.
    #[must_use]
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
        }
    }
}

/// Structured error body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// HTTP-equivalent status code.
    pub status_code: u16,
    /// RFC 3339 time the error was produced.
    pub timestamp: String,
    /// Request path.
    pub path: String,
    /// Request method.
    pub method: String,
    /// Human-readable message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorPayload {
    /// Creates a payload stamped with the current time.
    #[must_use]
    pub fn new(status: StatusCode, request: &RequestContext, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: request.path.clone(),
            method: request.method.clone(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches structured details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Classified client-facing view of a task service error.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedError {
    /// HTTP-equivalent status.
    pub status: StatusCode,
    /// Machine-readable code.
    pub code: &'static str,
    /// Message safe to show to the caller.
    pub message: String,
    /// Optional structured details.
    pub details: Option<serde_json::Value>,
}

impl ClassifiedError {
    /// Builds the structured payload for this error.
    #[must_use]
    pub fn payload(&self, request: &RequestContext) -> ErrorPayload {
        let payload = ErrorPayload::new(self.status, request, self.message.clone());
        match &self.details {
            Some(details) => payload.with_details(details.clone()),
            None => payload,
        }
    }
}

/// Maps a service error onto its client-facing classification, logging
/// internal failures.
#[must_use]
pub fn classify(error: &TaskServiceError) -> ClassifiedError {
    match error {
        TaskServiceError::InvalidInput(domain) => ClassifiedError {
            status: StatusCode::BAD_REQUEST,
            code: "BAD_REQUEST",
            message: domain.to_string(),
            details: None,
        },
        TaskServiceError::NotFound(task_id) => ClassifiedError {
            status: StatusCode::NOT_FOUND,
            code: "NOT_FOUND",
            message: "Task not found".to_owned(),
            details: Some(serde_json::json!({ "id": task_id.to_string() })),
        },
        TaskServiceError::Internal(source) => {
            tracing::error!(error = %source, "task operation failed");
            ClassifiedError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "INTERNAL_SERVER_ERROR",
                message: INTERNAL_ERROR_MESSAGE.to_owned(),
                details: None,
            }
        }
    }
}

/// Error response for failures outside GraphQL execution.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    status: StatusCode,
    payload: ErrorPayload,
}

impl ApiErrorResponse {
    /// Creates an error response.
    #[must_use]
    pub fn new(status: StatusCode, request: &RequestContext, message: impl Into<String>) -> Self {
        Self {
            status,
            payload: ErrorPayload::new(status, request, message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        tracing::warn!(
            status = self.payload.status_code,
            method = %self.payload.method,
            path = %self.payload.path,
            message = %self.payload.message,
            "request failed"
        );
        (self.status, Json(self.payload)).into_response()
    }
}
