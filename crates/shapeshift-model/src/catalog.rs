//! Definition document loading and per-service lookup.
//!
//! The definition document is one JSON object keyed
//! `service-name -> api-version -> {metadata, shapes, endpoints, operations}`.
//! Loading is a thin serde boundary: the catalog deserializes the whole
//! document, drops services it cannot sign for (anything that is not SigV4),
//! and freezes the rest. Everything downstream treats the result as
//! immutable.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::endpoint::EndpointTable;
use crate::error::{ModelError, ModelResult};
use crate::metadata::ServiceMetadata;
use crate::operation::OperationDef;
use crate::shape::ShapeGraph;

/// One API version of a service: metadata, shape graph, endpoint table, and
/// operation table. Built once at load time, read-only afterwards.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ServiceVersion {
    /// The version's metadata block.
    pub metadata: ServiceMetadata,
    /// All shapes declared by this version.
    #[serde(default)]
    pub shapes: ShapeGraph,
    /// Region endpoint table.
    #[serde(default)]
    pub endpoints: EndpointTable,
    /// Operation name to definition.
    #[serde(default)]
    pub operations: BTreeMap<String, OperationDef>,
}

impl ServiceVersion {
    /// Look up an operation definition by name.
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownOperation`] if the version does not
    /// declare the operation.
    pub fn operation(&self, name: &str) -> ModelResult<&OperationDef> {
        self.operations
            .get(name)
            .ok_or_else(|| ModelError::UnknownOperation(name.to_owned()))
    }

    /// All operation names declared by this version.
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }
}

/// All loaded API versions of one service.
///
/// "Latest" is resolved by lexicographic version-string order. AWS API
/// version strings are ISO dates, so this matches chronological order in
/// practice; it is still an approximation, kept deliberately.
#[derive(Debug, Clone)]
pub struct Service {
    name: String,
    versions: BTreeMap<String, ServiceVersion>,
}

impl Service {
    /// Construct a service from its versions. Returns `None` when the
    /// version map is empty, so `latest()` can rely on at least one entry.
    fn new(name: String, versions: BTreeMap<String, ServiceVersion>) -> Option<Self> {
        if versions.is_empty() {
            return None;
        }
        Some(Self { name, versions })
    }

    /// The service name (the top-level document key).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lexicographically greatest API version.
    #[must_use]
    pub fn latest(&self) -> &ServiceVersion {
        self.versions
            .last_key_value()
            .map(|(_, v)| v)
            .expect("service has at least one version")
    }

    /// The version string `latest()` resolves to.
    #[must_use]
    pub fn latest_version(&self) -> &str {
        self.versions
            .last_key_value()
            .map(|(k, _)| k.as_str())
            .expect("service has at least one version")
    }

    /// All available API version strings, ascending.
    pub fn api_versions(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    /// Look up a specific API version.
    #[must_use]
    pub fn version(&self, api_version: &str) -> Option<&ServiceVersion> {
        self.versions.get(api_version)
    }
}

/// The loaded definition document: every SigV4 service it declares.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    services: BTreeMap<String, Service>,
}

impl Catalog {
    /// Load a catalog from a definition document on disk.
    ///
    /// # Errors
    /// Returns [`ModelError::DefinitionIo`] when the file cannot be read and
    /// [`ModelError::DefinitionParse`] when it is not a valid definition
    /// document.
    pub fn from_path(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ModelError::DefinitionIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_slice(&bytes)
    }

    /// Load a catalog from definition document bytes.
    ///
    /// # Errors
    /// Returns [`ModelError::DefinitionParse`] when the bytes are not a valid
    /// definition document.
    pub fn from_slice(bytes: &[u8]) -> ModelResult<Self> {
        let document: BTreeMap<String, BTreeMap<String, ServiceVersion>> =
            serde_json::from_slice(bytes)?;
        Ok(Self::from_document(document))
    }

    /// Build the catalog from a parsed document, keeping only services whose
    /// latest version signs with SigV4.
    fn from_document(document: BTreeMap<String, BTreeMap<String, ServiceVersion>>) -> Self {
        let mut services = BTreeMap::new();
        for (name, versions) in document {
            let Some(service) = Service::new(name.clone(), versions) else {
                warn!(service = %name, "definition declares no versions, skipping");
                continue;
            };
            if !service.latest().metadata.is_sigv4() {
                debug!(service = %name, "service does not sign with SigV4, skipping");
                continue;
            }
            services.insert(name, service);
        }
        Self { services }
    }

    /// Look up a service by name.
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownService`] if the catalog does not contain
    /// the service.
    pub fn service(&self, name: &str) -> ModelResult<&Service> {
        self.services
            .get(name)
            .ok_or_else(|| ModelError::UnknownService(name.to_owned()))
    }

    /// All service names in the catalog.
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    /// Number of services in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
