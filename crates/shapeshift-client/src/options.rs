//! Caller overrides for a single invocation.

use shapeshift_auth::Credentials;

/// Per-invocation overrides. Everything is optional; defaults come from the
/// service model and the endpoint table.
#[derive(Debug, Clone, Default)]
pub struct InvokeOptions {
    /// Credentials to sign with. Unset credentials fail at signing time,
    /// before any network activity.
    pub credentials: Option<Credentials>,
    /// HTTP method override.
    pub method: Option<String>,
    /// Endpoint prefix override for hostname synthesis.
    pub endpoint_prefix: Option<String>,
    /// Host override.
    pub host: Option<String>,
    /// Region override.
    pub region: Option<String>,
    /// Full endpoint URL override.
    pub endpoint: Option<String>,
    /// Request URI override.
    pub request_uri: Option<String>,
    /// Content-type override.
    pub content_type: Option<String>,
    /// Signing-name override.
    pub signing_name: Option<String>,
    /// Skip input synthesis and send an empty input tree.
    pub no_params: bool,
    /// Extra header overrides, applied after protocol defaults.
    pub headers: Vec<(String, String)>,
}

impl InvokeOptions {
    /// Start from all-defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign with a prebuilt credentials object.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sign with an access key / secret key pair.
    #[must_use]
    pub fn with_keys(
        self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.with_credentials(Credentials::new(access_key_id, secret_access_key))
    }

    /// Override the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Override the endpoint prefix used for hostname synthesis.
    #[must_use]
    pub fn with_endpoint_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.endpoint_prefix = Some(prefix.into());
        self
    }

    /// Override the host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Override the region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Override the full endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Override the request URI.
    #[must_use]
    pub fn with_request_uri(mut self, uri: impl Into<String>) -> Self {
        self.request_uri = Some(uri.into());
        self
    }

    /// Override the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Override the signing name.
    #[must_use]
    pub fn with_signing_name(mut self, signing_name: impl Into<String>) -> Self {
        self.signing_name = Some(signing_name.into());
        self
    }

    /// Send an empty input tree regardless of the input shape.
    #[must_use]
    pub fn without_params(mut self) -> Self {
        self.no_params = true;
        self
    }

    /// Add one header override.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
