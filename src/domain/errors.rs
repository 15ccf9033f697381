//! Error types for the domain layer.

use std::fmt;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Error codes reported to the invoking platform.
///
/// The string form is what the Lambda runtime sees as `errorType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MalformedEvent,
    ObjectNotFound,
    StorageAccess,
    Decoding,
    Publish,
}

impl ErrorCode {
    /// Returns the canonical name of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MalformedEvent => "MalformedEventError",
            ErrorCode::ObjectNotFound => "ObjectNotFoundError",
            ErrorCode::StorageAccess => "StorageAccessError",
            ErrorCode::Decoding => "DecodingError",
            ErrorCode::Publish => "PublishError",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terminal failure of a single invocation.
///
/// None of these are recovered locally; they are logged and handed back to
/// the host, which owns retries and dead-lettering.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Malformed storage event: {0}")]
    MalformedEvent(String),

    #[error("Object not found: s3://{bucket}/{key}")]
    ObjectNotFound { bucket: String, key: String },

    #[error("Storage access failed: {0}")]
    StorageAccess(String),

    #[error("Object {key} is not valid UTF-8: {source}")]
    Decoding {
        key: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Failed to publish notification: {0}")]
    Publish(String),
}

impl HandlerError {
    /// Creates a malformed event error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        HandlerError::MalformedEvent(reason.into())
    }

    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            HandlerError::MalformedEvent(_) => ErrorCode::MalformedEvent,
            HandlerError::ObjectNotFound { .. } => ErrorCode::ObjectNotFound,
            HandlerError::StorageAccess(_) => ErrorCode::StorageAccess,
            HandlerError::Decoding { .. } => ErrorCode::Decoding,
            HandlerError::Publish(_) => ErrorCode::Publish,
        }
    }
}
