//! Formatting inputs and the formatted request artifact.

use chrono::{DateTime, Utc};

/// Everything a formatter needs besides the input tree itself.
///
/// Borrowed views into the operation, its service metadata, and the resolved
/// invocation context. One instance per invocation.
#[derive(Debug, Clone)]
pub struct FormatParams<'a> {
    /// Resolved host the request will be sent to.
    pub host: &'a str,
    /// Session token, attached (and signed) when present.
    pub session_token: Option<&'a str>,
    /// Operation name (query `Action`, json target suffix).
    pub operation_name: &'a str,
    /// Service API version (query `Version`).
    pub api_version: &'a str,
    /// JSON protocol sub-version for the json content type.
    pub json_version: &'a str,
    /// Target prefix for the `X-Amz-Target` header.
    pub target_prefix: &'a str,
    /// The operation's URI template.
    pub request_uri: &'a str,
    /// Caller content-type override.
    pub content_type: Option<&'a str>,
    /// Caller header overrides, applied after protocol defaults.
    pub extra_headers: &'a [(String, String)],
    /// The formatting clock; `Host`/`X-Amz-Date` derive from it.
    pub now: DateTime<Utc>,
}

/// The formatter's output: exactly what the signer canonicalizes.
#[derive(Debug, Clone)]
pub struct FormattedRequest {
    /// Complete header mapping (case-insensitive key matching).
    pub headers: http::HeaderMap,
    /// Body string; the signature covers these exact bytes.
    pub body: String,
    /// Resolved request URI (placeholders already handled per protocol).
    pub uri: String,
}
