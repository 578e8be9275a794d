//! Error types for request signing.

/// Errors raised while signing a request.
///
/// All of these are precondition failures: they are reported before any
/// network activity and are never retried.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No access key was supplied.
    #[error("no access key is available")]
    MissingAccessKey,

    /// No secret key was supplied.
    #[error("no secret key is available")]
    MissingSecretKey,

    /// A header value contains bytes that cannot participate in the
    /// canonical request.
    #[error("header {0} has a non-representable value")]
    NonCanonicalHeader(String),
}

/// Convenience result type for signing.
pub type AuthResult<T> = Result<T, AuthError>;
