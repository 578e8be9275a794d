//! Error types for the service definition model.

/// Errors raised while loading or querying a service definition.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The requested service does not exist in the catalog.
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// The requested operation does not exist in the service version.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// A shape reference names a shape that is absent from the graph.
    #[error("dangling shape reference: {0}")]
    DanglingShape(String),

    /// The service declares a protocol no formatter exists for.
    #[error("unsupported protocol: {0}")]
    UnsupportedProtocol(String),

    /// The definition document could not be read from disk.
    #[error("failed to read service definition from {path}")]
    DefinitionIo {
        /// Path of the definition document.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The definition document is not valid JSON for the expected layout.
    #[error("failed to parse service definition")]
    DefinitionParse(#[from] serde_json::Error),
}

/// Convenience result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
