//! SigV4 key derivation, signature computation, and request signing.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use http::HeaderMap;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::canonical::{build_canonical_request, canonical_headers, canonical_uri};
use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// The signing algorithm identifier.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Timestamp format of the string to sign (matches `X-Amz-Date`).
const AMZ_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Date-only format of the credential scope.
const DATE_STAMP_FORMAT: &str = "%Y%m%d";

/// How the payload hash treats the formatted body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadPolicy {
    /// Hash the exact body bytes.
    Exact,
    /// Hash an empty payload when the body is exactly `{}` — the rest-json
    /// wire convention for bodiless requests.
    EmptyObjectAsEmpty,
}

/// The resolved signing context for one invocation.
#[derive(Debug)]
pub struct SigningParams<'a> {
    /// Caller credentials.
    pub credentials: &'a Credentials,
    /// HTTP method.
    pub method: &'a str,
    /// Region the request is signed for.
    pub region: &'a str,
    /// Service name bound into the credential scope.
    pub signing_name: &'a str,
    /// Endpoint URL the signed request dispatches to.
    pub endpoint: &'a str,
    /// The signing clock; must match the formatter's `X-Amz-Date`.
    pub now: DateTime<Utc>,
    /// Payload hashing policy for the declared protocol.
    pub payload_policy: PayloadPolicy,
}

/// A dispatch-ready signed request.
///
/// Owns its header mapping: the `Authorization` header lives here and only
/// here, never in the formatter's caller-visible map.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// HTTP method.
    pub method: String,
    /// Absolute request URL.
    pub url: String,
    /// Complete outbound headers, including `Authorization`.
    pub headers: HeaderMap,
    /// Body bytes as a string.
    pub body: String,
}

/// Hex-encoded SHA-256 of a payload.
#[must_use]
pub fn hash_payload(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}

/// Derive the signing key through the four-step HMAC chain.
#[must_use]
pub fn derive_signing_key(
    secret_key: &str,
    date_stamp: &str,
    region: &str,
    service: &str,
) -> Vec<u8> {
    let k_date = hmac_sign(format!("AWS4{secret_key}").as_bytes(), date_stamp);
    let k_region = hmac_sign(&k_date, region);
    let k_service = hmac_sign(&k_region, service);
    hmac_sign(&k_service, "aws4_request")
}

/// Build the string to sign from the timestamp, scope, and canonical request
/// hash.
#[must_use]
pub fn build_string_to_sign(
    amz_date: &str,
    credential_scope: &str,
    canonical_request_hash: &str,
) -> String {
    format!("{ALGORITHM}\n{amz_date}\n{credential_scope}\n{canonical_request_hash}")
}

/// Hex-encoded HMAC of the string to sign under the derived key.
#[must_use]
pub fn compute_signature(signing_key: &[u8], string_to_sign: &str) -> String {
    hex::encode(hmac_sign(signing_key, string_to_sign))
}

/// Sign a formatted request.
///
/// Builds the canonical request over exactly the headers and body the
/// formatter produced, computes the signature, and returns a new request
/// carrying the `Authorization` header. The input header mapping is left
/// untouched.
///
/// # Errors
/// Returns [`AuthError::MissingAccessKey`] / [`AuthError::MissingSecretKey`]
/// before any other work when the credential pair is incomplete, and
/// [`AuthError::NonCanonicalHeader`] when a header cannot be canonicalized.
pub fn sign_request(
    params: &SigningParams<'_>,
    headers: &HeaderMap,
    uri: &str,
    body: &str,
) -> AuthResult<SignedRequest> {
    if params.credentials.access_key_id.is_empty() {
        return Err(AuthError::MissingAccessKey);
    }
    if params.credentials.secret_access_key.is_empty() {
        return Err(AuthError::MissingSecretKey);
    }

    let amz_date = params.now.format(AMZ_DATE_FORMAT).to_string();
    let date_stamp = params.now.format(DATE_STAMP_FORMAT).to_string();

    let payload = match params.payload_policy {
        PayloadPolicy::EmptyObjectAsEmpty if body == "{}" => "",
        _ => body,
    };
    let payload_hash = hash_payload(payload.as_bytes());

    let (canonical_header_block, signed_headers) = canonical_headers(headers)?;
    let canonical_request = build_canonical_request(
        params.method,
        uri,
        &canonical_header_block,
        &signed_headers,
        &payload_hash,
    );
    debug!(canonical_request, "built canonical request");

    let credential_scope = format!(
        "{date_stamp}/{}/{}/aws4_request",
        params.region, params.signing_name
    );
    let canonical_request_hash = hex::encode(Sha256::digest(canonical_request.as_bytes()));
    let string_to_sign = build_string_to_sign(&amz_date, &credential_scope, &canonical_request_hash);
    debug!(string_to_sign, "built string to sign");

    let signing_key = derive_signing_key(
        &params.credentials.secret_access_key,
        &date_stamp,
        params.region,
        params.signing_name,
    );
    let signature = compute_signature(&signing_key, &string_to_sign);

    let authorization = format!(
        "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={signed_headers}, \
         Signature={signature}",
        params.credentials.access_key_id
    );

    let mut outbound = headers.clone();
    outbound.insert(
        http::header::AUTHORIZATION,
        authorization
            .parse()
            .map_err(|_| AuthError::NonCanonicalHeader("authorization".to_owned()))?,
    );

    Ok(SignedRequest {
        method: params.method.to_owned(),
        url: format!(
            "{}{}",
            params.endpoint.trim_end_matches('/'),
            canonical_uri(uri)
        ),
        headers: outbound,
        body: body.to_owned(),
    })
}

fn hmac_sign(key: &[u8], message: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    mac.finalize().into_bytes().to_vec()
}
