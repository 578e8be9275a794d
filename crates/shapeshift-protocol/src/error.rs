//! Error types for request formatting.

/// Errors raised while formatting a request.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A header override's name is not a valid HTTP header name.
    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),

    /// A header's value cannot be carried in an HTTP header.
    #[error("invalid value for header {0}")]
    InvalidHeaderValue(String),
}

/// Convenience result type for formatting.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
