//! Shared header construction.
//!
//! Merge order: protocol defaults, then the caller's content-type override,
//! then caller header overrides, and finally the always-recomputed set
//! (`Host`, `X-Amz-Date`, `X-Amz-Security-Token`) so no override can carry a
//! stale date or host into the signature.

use chrono::{DateTime, Utc};
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{ProtocolError, ProtocolResult};
use crate::request::FormatParams;

/// Timestamp format for the `X-Amz-Date` header (ISO 8601 basic).
pub const AMZ_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Render a formatting clock as an `X-Amz-Date` value.
#[must_use]
pub fn amz_date(now: DateTime<Utc>) -> String {
    now.format(AMZ_DATE_FORMAT).to_string()
}

/// Build the complete header mapping for one request.
///
/// A fresh map is allocated per call; nothing is shared across invocations.
///
/// # Errors
/// Returns [`ProtocolError`] when an override is not a representable HTTP
/// header.
pub fn build_headers(
    defaults: &[(&str, &str)],
    params: &FormatParams<'_>,
) -> ProtocolResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    for (name, value) in defaults {
        insert(&mut headers, name, value)?;
    }
    if let Some(content_type) = params.content_type {
        insert(&mut headers, "content-type", content_type)?;
    }
    for (name, value) in params.extra_headers {
        insert(&mut headers, name, value)?;
    }

    // Recomputed last; overrides cannot stale these.
    insert(&mut headers, "host", params.host)?;
    insert(&mut headers, "x-amz-date", &amz_date(params.now))?;
    if let Some(token) = params.session_token {
        insert(&mut headers, "x-amz-security-token", token)?;
    }

    Ok(headers)
}

fn insert(headers: &mut HeaderMap, name: &str, value: &str) -> ProtocolResult<()> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ProtocolError::InvalidHeaderName(name.to_owned()))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|_| ProtocolError::InvalidHeaderValue(name.to_owned()))?;
    headers.insert(header_name, header_value);
    Ok(())
}
