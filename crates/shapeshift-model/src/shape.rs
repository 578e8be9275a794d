//! The typed shape graph.
//!
//! Shapes describe the type and constraints of a single value in an
//! operation's input: scalars with optional string constraints, lists with a
//! member shape, and structures with named members. Shapes refer to each
//! other by name through the graph and may be mutually or self-referential;
//! resolution order is the consumer's problem (see `shapeshift-synth`).

use std::collections::BTreeMap;

use crate::error::ModelError;

/// A reference from one shape (or operation input) to a named shape.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    /// Name of the referenced shape in the graph.
    pub shape: String,
    /// Serialized element name override (list members default to `member`).
    #[serde(default)]
    pub location_name: Option<String>,
}

/// Constraints carried by a `string` shape.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct StringShape {
    /// Regex the value must match.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Ordered set of allowed literals.
    #[serde(default, rename = "enum")]
    pub enum_values: Option<Vec<String>>,
    /// Minimum length.
    #[serde(default)]
    pub min: Option<usize>,
}

/// A `list` shape: a sequence of values of one member shape.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ListShape {
    /// The shape of each element.
    pub member: MemberRef,
}

/// A `map` shape. Synthesis for maps is not implemented; the definition is
/// still parsed so the graph loads without loss.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MapShape {
    /// The key shape.
    pub key: MemberRef,
    /// The value shape.
    pub value: MemberRef,
}

/// A `structure` shape: named members, of which only those listed in
/// `required` participate in synthesis.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct StructureShape {
    /// Member name to shape reference.
    #[serde(default)]
    pub members: BTreeMap<String, MemberRef>,
    /// Ordered list of required member names.
    #[serde(default)]
    pub required: Vec<String>,
}

/// One shape definition, discriminated by the document's `type` field.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDef {
    /// A string, optionally constrained by pattern/enum/min.
    String(StringShape),
    /// A 32-bit integer.
    Integer,
    /// A 64-bit integer.
    Long,
    /// A boolean.
    Boolean,
    /// A double-precision float.
    Double,
    /// A single-precision float.
    Float,
    /// A point in time.
    Timestamp,
    /// Opaque binary data.
    Blob,
    /// A homogeneous sequence.
    List(ListShape),
    /// A key/value mapping.
    Map(MapShape),
    /// A record with named members.
    Structure(StructureShape),
}

impl ShapeDef {
    /// The document-level type name of this shape.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::Float => "float",
            Self::Timestamp => "timestamp",
            Self::Blob => "blob",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Structure(_) => "structure",
        }
    }
}

/// An immutable map of shape name to shape definition.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(transparent)]
pub struct ShapeGraph(BTreeMap<String, ShapeDef>);

impl ShapeGraph {
    /// Look up a shape by name.
    ///
    /// # Errors
    /// Returns [`ModelError::DanglingShape`] if the name is absent. A dangling
    /// reference is a precondition failure: the definition document promised a
    /// shape it does not contain.
    pub fn get(&self, name: &str) -> Result<&ShapeDef, ModelError> {
        self.0
            .get(name)
            .ok_or_else(|| ModelError::DanglingShape(name.to_owned()))
    }

    /// Whether the graph contains a shape with the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of shapes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ShapeDef)> for ShapeGraph {
    fn from_iter<I: IntoIterator<Item = (String, ShapeDef)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
