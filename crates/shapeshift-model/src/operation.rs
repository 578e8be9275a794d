//! Operation definitions.

/// Reference from an operation to its input shape.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ShapeRef {
    /// Name of the input shape in the service's shape graph.
    pub shape: String,
}

/// HTTP binding of an operation.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpBinding {
    /// HTTP method.
    pub method: String,
    /// URI template; may contain `{param}` placeholder tokens.
    pub request_uri: String,
}

/// One callable operation as declared by the definition document.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDef {
    /// Operation name (e.g. `DescribeThing`).
    pub name: String,
    /// HTTP method and URI template.
    pub http: HttpBinding,
    /// Input shape reference; absent for operations that take no input.
    #[serde(default)]
    pub input: Option<ShapeRef>,
}
