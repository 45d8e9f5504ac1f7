//! Error types for the transport layer.
//!
//! # Responsibilities
//! - Classify the few ways a conversion or handler invocation can fail
//! - Map failures onto the host framework's standard error responses
//!
//! # Design Decisions
//! - An HTTP method the generic vocabulary cannot express means no handler
//!   can exist for the request, so it surfaces as 404 rather than 400
//! - Body stream failures are not represented here; they propagate through
//!   the body itself as write errors on the host connection

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Boxed error used by body streams and operation handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures raised while registering routes or converting messages.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The inbound request used an HTTP method the generic vocabulary
    /// cannot express, so no registered handler can apply.
    #[error("no handler can exist for HTTP method `{0}`")]
    UnsupportedMethod(String),

    /// The host router cannot route the given method, so registration
    /// would install a route that never matches.
    #[error("host router cannot route HTTP method `{0}`")]
    UnroutableMethod(String),

    /// The generic response carried a status code outside the valid range.
    #[error("invalid HTTP status code {0}")]
    InvalidStatus(u16),

    /// The operation handler itself failed.
    #[error("operation handler failed: {0}")]
    Handler(#[source] BoxError),
}

impl IntoResponse for TransportError {
    fn into_response(self) -> Response {
        let status = match &self {
            TransportError::UnsupportedMethod(method) => {
                tracing::debug!(method = %method, "request method has no generic equivalent");
                StatusCode::NOT_FOUND
            }
            TransportError::UnroutableMethod(method) => {
                tracing::warn!(method = %method, "method rejected by host router");
                StatusCode::NOT_FOUND
            }
            TransportError::InvalidStatus(code) => {
                tracing::error!(status = code, "handler produced an invalid status code");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            TransportError::Handler(err) => {
                tracing::error!(error = %err, "operation handler failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status.into_response()
    }
}
