//! Error types for route registration.

use thiserror::Error;

/// Router-specific errors.
///
/// Every variant except the route-table ones describes a bad route
/// declaration. A failed registration leaves the router untouched.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Path template is empty or does not start with `/`.
    #[error("malformed path provided: {0:?}")]
    InvalidPath(String),

    /// No handler was supplied for the route.
    #[error("handler missing for {method} {path}")]
    InvalidHandler {
        /// Method token as given by the caller.
        method: String,
        /// Path template as given by the caller.
        path: String,
    },

    /// Method token is not one of the supported HTTP methods.
    #[error("invalid HTTP method: {0:?}")]
    InvalidMethod(String),

    /// A path segment contains a space.
    #[error("malformed segment {segment:?} in path {path:?}")]
    MalformedSegment {
        /// The full path template.
        path: String,
        /// The offending segment.
        segment: String,
    },

    /// Route table could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Route table is not valid JSON.
    #[error("invalid route table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
