//! Per-protocol request formatting for shapeshift.
//!
//! One formatter per wire protocol turns an operation's metadata and its
//! synthesized input tree into the exact headers, body, and URI that will be
//! signed and dispatched. The formatter and the signer must agree on bytes:
//! whatever leaves this crate is what the signature is computed over.
//!
//! - **query** ([`query`]): URL-form-encoded `Action`/`Version` bodies
//! - **json** ([`json`]): JSON bodies addressed via `X-Amz-Target`
//! - **rest-json** ([`rest_json`]): JSON bodies against templated URIs
//!
//! Header mappings are built fresh per invocation; `Host`, `X-Amz-Date`, and
//! `X-Amz-Security-Token` are recomputed last so caller overrides can never
//! stale them.

pub mod error;
pub mod headers;
pub mod json;
pub mod query;
pub mod request;
pub mod rest_json;

pub use error::{ProtocolError, ProtocolResult};
pub use request::{FormatParams, FormattedRequest};

use shapeshift_model::Protocol;
use shapeshift_synth::Value;

/// Format a request for the given protocol.
///
/// # Errors
/// Returns [`ProtocolError`] when a header override cannot be represented as
/// an HTTP header.
pub fn format_request(
    protocol: Protocol,
    params: &FormatParams<'_>,
    input: &Value,
) -> ProtocolResult<FormattedRequest> {
    tracing::debug!(protocol = %protocol, operation = %params.operation_name, "formatting request");
    match protocol {
        Protocol::Query => query::format(params, input),
        Protocol::Json => json::format(params, input),
        Protocol::RestJson => rest_json::format(params, input),
    }
}
