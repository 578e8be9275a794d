//! Canonical request construction for AWS Signature Version 4.
//!
//! The canonical request format:
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```
//!
//! Two properties are specific to this runtime: the canonical URI is the
//! formatter's resolved path verbatim (the formatter already owns the byte
//! representation being signed), and the canonical query string is always
//! empty because every formatter carries its parameters in the body.

use std::collections::BTreeMap;

use http::HeaderMap;

use crate::error::{AuthError, AuthResult};

/// Build the full canonical request string.
#[must_use]
pub fn build_canonical_request(
    method: &str,
    uri: &str,
    canonical_headers: &str,
    signed_headers: &str,
    payload_hash: &str,
) -> String {
    let canonical_uri = canonical_uri(uri);
    // The empty line between URI and headers is the (always empty) canonical
    // query string.
    format!("{method}\n{canonical_uri}\n\n{canonical_headers}\n{signed_headers}\n{payload_hash}")
}

/// Canonical URI: the resolved request path, with only the empty path
/// normalized to `/`.
#[must_use]
pub fn canonical_uri(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}

/// Build the canonical headers block and the signed-headers list from a
/// request's complete header mapping.
///
/// Every header participates: names are lower-cased (header maps already
/// store them that way), sorted lexicographically, and rendered as
/// `name:value\n` with the trailing newline on the whole block. The
/// signed-headers list is the same ordering joined by `;`.
///
/// # Errors
/// Returns [`AuthError::NonCanonicalHeader`] when a header value is not
/// valid UTF-8.
pub fn canonical_headers(headers: &HeaderMap) -> AuthResult<(String, String)> {
    let mut sorted: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (name, value) in headers {
        let value = value
            .to_str()
            .map_err(|_| AuthError::NonCanonicalHeader(name.as_str().to_owned()))?;
        sorted.entry(name.as_str()).or_default().push(value);
    }

    let mut block = String::new();
    for (name, values) in &sorted {
        block.push_str(name);
        block.push(':');
        block.push_str(&values.join(","));
        block.push('\n');
    }

    let signed = sorted.keys().copied().collect::<Vec<_>>().join(";");
    Ok((block, signed))
}
