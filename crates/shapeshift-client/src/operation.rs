//! One callable operation and its invoke pipeline.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shapeshift_auth::{PayloadPolicy, SigningParams, sign_request};
use shapeshift_model::{OperationDef, Protocol, ServiceVersion};
use shapeshift_protocol::{FormatParams, format_request};
use shapeshift_synth::{PatternSampler, ShapeResolver, Value};
use tracing::{debug, warn};

use crate::error::ClientResult;
use crate::options::InvokeOptions;
use crate::region::{is_safe_region, resolve_endpoint, resolve_host, resolve_region};
use crate::transport::{Transport, TransportResponse};

/// A stateless handle to one operation of a loaded service version.
///
/// Constructed once per service load and safe to reuse across concurrent
/// invocations: every invoke allocates its own input tree and header mapping.
#[derive(Clone)]
pub struct Operation {
    version: Arc<ServiceVersion>,
    def: OperationDef,
    sampler: Arc<dyn PatternSampler>,
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.def.name)
            .field("method", &self.def.http.method)
            .field("request_uri", &self.def.http.request_uri)
            .finish_non_exhaustive()
    }
}

impl Operation {
    pub(crate) fn new(
        version: Arc<ServiceVersion>,
        def: OperationDef,
        sampler: Arc<dyn PatternSampler>,
    ) -> Self {
        Self {
            version,
            def,
            sampler,
        }
    }

    /// The operation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// The default HTTP method.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.def.http.method
    }

    /// The URI template.
    #[must_use]
    pub fn request_uri(&self) -> &str {
        &self.def.http.request_uri
    }

    /// Synthesize this operation's default input tree.
    ///
    /// Operations without an input shape yield the empty tree.
    ///
    /// # Errors
    /// Returns an error for synthesis precondition failures (dangling shape
    /// references, undeclared required members).
    pub fn resolve_input(&self) -> ClientResult<Value> {
        match &self.def.input {
            None => Ok(Value::empty()),
            Some(input) => {
                let resolver = ShapeResolver::new(&self.version.shapes, self.sampler.as_ref());
                Ok(resolver.resolve(&input.shape)?)
            }
        }
    }

    /// Invoke the operation with the current clock.
    ///
    /// # Errors
    /// Returns precondition, formatting, signing, or transport failures; see
    /// [`crate::ClientError`].
    pub async fn invoke(
        &self,
        transport: &dyn Transport,
        options: &InvokeOptions,
    ) -> ClientResult<TransportResponse> {
        self.invoke_at(transport, options, Utc::now()).await
    }

    /// Invoke the operation with an explicit clock.
    ///
    /// The clock feeds both the `X-Amz-Date` header and the credential scope,
    /// which makes the whole pipeline deterministic under test.
    ///
    /// # Errors
    /// Returns precondition, formatting, signing, or transport failures; see
    /// [`crate::ClientError`].
    pub async fn invoke_at(
        &self,
        transport: &dyn Transport,
        options: &InvokeOptions,
        now: DateTime<Utc>,
    ) -> ClientResult<TransportResponse> {
        let metadata = &self.version.metadata;
        // Protocol dispatch happens first: an unsupported protocol must fail
        // before any resolution work.
        let protocol = metadata.wire_protocol()?;

        let endpoint_prefix = options
            .endpoint_prefix
            .as_deref()
            .unwrap_or(&metadata.endpoint_prefix);
        let region = resolve_region(&self.version.endpoints, options.region.as_deref());
        if !is_safe_region(&region) {
            warn!(region = %region, operation = %self.def.name, "resolved region is outside the safe list");
        }
        let host = resolve_host(
            &self.version.endpoints,
            &region,
            endpoint_prefix,
            options.host.as_deref(),
        );
        let endpoint = resolve_endpoint(&host, options.endpoint.as_deref());
        let method = options.method.as_deref().unwrap_or(&self.def.http.method);
        let request_uri = options
            .request_uri
            .as_deref()
            .unwrap_or(&self.def.http.request_uri);
        let credentials = options.credentials.clone().unwrap_or_default();

        let input = if options.no_params {
            Value::empty()
        } else {
            self.resolve_input()?
        };

        let params = FormatParams {
            host: &host,
            session_token: credentials.session_token.as_deref(),
            operation_name: &self.def.name,
            api_version: &metadata.api_version,
            json_version: metadata.resolved_json_version(),
            target_prefix: metadata.resolved_target_prefix(),
            request_uri,
            content_type: options.content_type.as_deref(),
            extra_headers: &options.headers,
            now,
        };
        let formatted = format_request(protocol, &params, &input)?;

        let signing_name = options
            .signing_name
            .as_deref()
            .unwrap_or_else(|| metadata.resolved_signing_name());
        let payload_policy = if protocol == Protocol::RestJson {
            PayloadPolicy::EmptyObjectAsEmpty
        } else {
            PayloadPolicy::Exact
        };
        let signing = SigningParams {
            credentials: &credentials,
            method,
            region: &region,
            signing_name,
            endpoint: &endpoint,
            now,
            payload_policy,
        };
        let signed = sign_request(&signing, &formatted.headers, &formatted.uri, &formatted.body)?;

        debug!(
            operation = %self.def.name,
            protocol = %protocol,
            region = %region,
            url = %signed.url,
            "dispatching signed request"
        );
        Ok(transport.send(&signed).await?)
    }
}
