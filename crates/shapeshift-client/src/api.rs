//! The per-service entry point.

use std::sync::Arc;

use shapeshift_model::{ModelResult, Protocol, Service, ServiceMetadata, ServiceVersion};
use shapeshift_synth::{PatternSampler, RegexSampler};

use crate::operation::Operation;

/// One service's callable surface, bound to its latest API version.
///
/// Built once per loaded service; immutable afterwards, so it can be shared
/// across tasks freely.
#[derive(Clone)]
pub struct Api {
    name: String,
    version: Arc<ServiceVersion>,
    sampler: Arc<dyn PatternSampler>,
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("name", &self.name)
            .field("api_version", &self.version.metadata.api_version)
            .field("protocol", &self.version.metadata.protocol)
            .finish_non_exhaustive()
    }
}

impl Api {
    /// Bind a catalog service's latest version.
    #[must_use]
    pub fn new(service: &Service) -> Self {
        Self::from_version(service.name(), service.latest().clone())
    }

    /// Bind an explicit service version.
    #[must_use]
    pub fn from_version(name: impl Into<String>, version: ServiceVersion) -> Self {
        Self {
            name: name.into(),
            version: Arc::new(version),
            sampler: Arc::new(RegexSampler::new()),
        }
    }

    /// Substitute the pattern sampler used for input synthesis.
    #[must_use]
    pub fn with_sampler(mut self, sampler: Arc<dyn PatternSampler>) -> Self {
        self.sampler = sampler;
        self
    }

    /// The service name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound version's metadata.
    #[must_use]
    pub fn metadata(&self) -> &ServiceMetadata {
        &self.version.metadata
    }

    /// The declared protocol string, parsed.
    ///
    /// # Errors
    /// Returns an error when no formatter exists for the declared protocol.
    pub fn protocol(&self) -> ModelResult<Protocol> {
        self.version.metadata.wire_protocol()
    }

    /// All operation names of the bound version.
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.version.operation_names()
    }

    /// Look up one operation.
    ///
    /// # Errors
    /// Returns an error when the version does not declare the operation.
    pub fn operation(&self, name: &str) -> ModelResult<Operation> {
        let def = self.version.operation(name)?.clone();
        Ok(Operation::new(
            Arc::clone(&self.version),
            def,
            Arc::clone(&self.sampler),
        ))
    }
}
