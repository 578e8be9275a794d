//! The `query` protocol formatter.
//!
//! Requests are URL-form-encoded bodies carrying `Action` and `Version`
//! followed by the flattened input tree.

use shapeshift_synth::Value;

use crate::error::ProtocolResult;
use crate::headers::build_headers;
use crate::request::{FormatParams, FormattedRequest};

/// Default content type for query-protocol bodies.
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// Format a query-protocol request.
///
/// # Errors
/// Returns [`crate::ProtocolError`] when a header override is not
/// representable.
pub fn format(params: &FormatParams<'_>, input: &Value) -> ProtocolResult<FormattedRequest> {
    let headers = build_headers(&[("content-type", CONTENT_TYPE)], params)?;

    let mut body = form_urlencoded::Serializer::new(String::new());
    body.append_pair("Action", params.operation_name);
    body.append_pair("Version", params.api_version);
    for (field, value) in input.to_query_pairs() {
        body.append_pair(&field, &value);
    }

    Ok(FormattedRequest {
        headers,
        body: body.finish(),
        uri: params.request_uri.to_owned(),
    })
}
