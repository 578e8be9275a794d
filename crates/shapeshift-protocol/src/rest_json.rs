//! The `rest-json` protocol formatter.
//!
//! The body is the JSON encoding of the input tree. URI template
//! `{placeholder}` tokens are stripped rather than substituted with path
//! parameter values; the resulting URI differs from what a full client would
//! send and is a documented limitation.

use shapeshift_synth::Value;

use crate::error::ProtocolResult;
use crate::headers::build_headers;
use crate::request::{FormatParams, FormattedRequest};

/// Default content type for rest-json bodies.
pub const CONTENT_TYPE: &str = "application/json";

/// Format a rest-json-protocol request.
///
/// # Errors
/// Returns [`crate::ProtocolError`] when a header override is not
/// representable.
pub fn format(params: &FormatParams<'_>, input: &Value) -> ProtocolResult<FormattedRequest> {
    let headers = build_headers(&[("content-type", CONTENT_TYPE)], params)?;

    Ok(FormattedRequest {
        headers,
        body: input.to_json().to_string(),
        uri: strip_placeholders(params.request_uri),
    })
}

/// Remove `{param}` tokens from a URI template.
fn strip_placeholders(uri: &str) -> String {
    let mut out = String::with_capacity(uri.len());
    let mut rest = uri;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        match rest[open..].find('}') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                // Unmatched brace; keep the remainder untouched.
                rest = &rest[open..];
                break;
            }
        }
    }
    out.push_str(rest);
    out
}
