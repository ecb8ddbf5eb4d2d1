//! Domain-level error type.
//!
//! Errors stay transport agnostic: the HTTP adapter decides which status code
//! and body shape each [`ErrorCode`] maps to. A lookup that finds nothing is
//! not an error at this level; handlers decide when absence becomes
//! [`ErrorCode::NotFound`].

use std::fmt;

use crate::domain::TraceId;

/// Stable machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request could not be interpreted (for example a malformed path
    /// parameter).
    InvalidRequest,
    /// The requested record does not exist.
    NotFound,
    /// A backing service (usually the database) could not be reached.
    ServiceUnavailable,
    /// An unexpected failure inside the application.
    InternalError,
}

/// Error raised by use-cases and surfaced to inbound adapters.
///
/// The ambient [`TraceId`] is captured at construction so adapters can echo
/// it back to clients.
///
/// # Examples
/// ```
/// use sample_app::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Feature1 not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "Feature1 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create an error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Replace the captured trace identifier.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace identifier active when the error was raised, if any.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
