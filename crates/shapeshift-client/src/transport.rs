//! The outbound HTTP boundary.
//!
//! The runtime builds and signs requests; it never owns the socket. A
//! [`Transport`] takes one signed request and returns the raw response or a
//! transport-level error, unchanged and uninterpreted. No retries, no status
//! handling, no timeouts here; those belong to the transport implementation
//! and its caller.

use async_trait::async_trait;
use bytes::Bytes;
use shapeshift_auth::SignedRequest;

/// Transport-level failures, surfaced to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client failed (DNS, connection, protocol).
    #[error("http dispatch failed")]
    Http(#[from] reqwest::Error),

    /// The signed request could not be converted for the underlying client.
    #[error("unsendable request: {0}")]
    Unsendable(String),
}

/// The raw response as the transport produced it.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: http::HeaderMap,
    /// Response body bytes.
    pub body: Bytes,
}

/// Dispatches one signed request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the HTTP call.
    async fn send(&self, request: &SignedRequest) -> Result<TransportResponse, TransportError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-configured client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &SignedRequest) -> Result<TransportResponse, TransportError> {
        let method = http::Method::from_bytes(request.method.as_bytes())
            .map_err(|_| TransportError::Unsendable(format!("method {}", request.method)))?;

        let response = self
            .client
            .request(method, &request.url)
            .headers(request.headers.clone())
            .body(request.body.clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
