//! Service metadata and wire protocol identification.

use std::str::FromStr;

use crate::error::ModelError;

/// The wire protocols the runtime can format requests for.
///
/// Protocol selection is a tagged variant dispatched once per invocation from
/// the metadata's declared protocol string; a string outside this set is a
/// hard [`ModelError::UnsupportedProtocol`] failure and no request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// URL-form-encoded `Action`/`Version` bodies.
    Query,
    /// JSON-RPC style bodies addressed via `X-Amz-Target`.
    Json,
    /// JSON bodies against templated REST URIs.
    RestJson,
}

impl Protocol {
    /// The protocol identifier as it appears in service metadata.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Json => "json",
            Self::RestJson => "rest-json",
        }
    }
}

impl FromStr for Protocol {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" => Ok(Self::Query),
            "json" => Ok(Self::Json),
            "rest-json" => Ok(Self::RestJson),
            other => Err(ModelError::UnsupportedProtocol(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One service version's metadata block.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    /// Declared wire protocol (`query` | `json` | `rest-json` | others).
    pub protocol: String,
    /// DNS prefix used to synthesize hostnames.
    pub endpoint_prefix: String,
    /// API version string (e.g. `2021-01-01`).
    pub api_version: String,
    /// Prefix for the `X-Amz-Target` header on json-protocol services.
    #[serde(default)]
    pub target_prefix: Option<String>,
    /// Service name used in the credential scope when it differs from the
    /// endpoint prefix.
    #[serde(default)]
    pub signing_name: Option<String>,
    /// JSON protocol sub-version carried in the content type.
    #[serde(default)]
    pub json_version: Option<String>,
    /// Request signature scheme version (`v4` is the only supported one).
    #[serde(default)]
    pub signature_version: Option<String>,
}

impl ServiceMetadata {
    /// Parse the declared protocol string.
    ///
    /// # Errors
    /// Returns [`ModelError::UnsupportedProtocol`] when no formatter exists
    /// for the declared protocol.
    pub fn wire_protocol(&self) -> Result<Protocol, ModelError> {
        self.protocol.parse()
    }

    /// Target prefix, falling back to the endpoint prefix.
    #[must_use]
    pub fn resolved_target_prefix(&self) -> &str {
        self.target_prefix.as_deref().unwrap_or(&self.endpoint_prefix)
    }

    /// Signing name, falling back to the endpoint prefix.
    #[must_use]
    pub fn resolved_signing_name(&self) -> &str {
        self.signing_name.as_deref().unwrap_or(&self.endpoint_prefix)
    }

    /// JSON protocol version, falling back to `1.0`.
    #[must_use]
    pub fn resolved_json_version(&self) -> &str {
        self.json_version.as_deref().unwrap_or("1.0")
    }

    /// Whether this service signs requests with SigV4.
    #[must_use]
    pub fn is_sigv4(&self) -> bool {
        self.signature_version.as_deref() == Some("v4")
    }
}
