//! The `json` protocol formatter.
//!
//! All requests go to the operation's URI (typically `/`) with the operation
//! addressed via `X-Amz-Target: <targetPrefix>.<operationName>` and a
//! versioned `application/x-amz-json-<n>` content type. The body is the JSON
//! encoding of the input tree, with no wrapper fields.

use shapeshift_synth::Value;

use crate::error::ProtocolResult;
use crate::headers::build_headers;
use crate::request::{FormatParams, FormattedRequest};

/// Content type for a given JSON protocol sub-version.
#[must_use]
pub fn content_type(json_version: &str) -> String {
    format!("application/x-amz-json-{json_version}")
}

/// Format a json-protocol request.
///
/// # Errors
/// Returns [`crate::ProtocolError`] when a header override is not
/// representable.
pub fn format(params: &FormatParams<'_>, input: &Value) -> ProtocolResult<FormattedRequest> {
    let content_type = content_type(params.json_version);
    let target = format!("{}.{}", params.target_prefix, params.operation_name);
    let headers = build_headers(
        &[
            ("content-type", content_type.as_str()),
            ("x-amz-target", target.as_str()),
        ],
        params,
    )?;

    Ok(FormattedRequest {
        headers,
        body: input.to_json().to_string(),
        uri: params.request_uri.to_owned(),
    })
}
