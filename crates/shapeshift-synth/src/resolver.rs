//! The recursive shape resolver.

use shapeshift_model::{ShapeDef, ShapeGraph, StringShape, StructureShape};
use tracing::warn;

use crate::error::{SynthError, SynthResult};
use crate::pattern::PatternSampler;
use crate::value::Value;

/// Literal substituted when pattern sampling fails, and past the recursion
/// cap.
const FALLBACK_LITERAL: &str = "a";

/// Placeholder for strings with no constraints at all.
const PLACEHOLDER_STRING: &str = "aaaaaa";

/// Fixed epoch-seconds literal for timestamp shapes.
const TIMESTAMP_LITERAL: &str = "1615593755.796672";

/// Fixed placeholder byte-string for blob shapes.
const BLOB_LITERAL: &str = "bbbbbbbbebfbebebbebebb";

/// Placeholder emitted for the unimplemented map variant.
const MAP_PLACEHOLDER: &str = "map";

/// Default element name for list members without a `locationName`.
const DEFAULT_LIST_MEMBER: &str = "member";

/// Synthesizes value trees from a shape graph.
///
/// Resolution is total and deterministic except for pattern-constrained
/// strings, which delegate to the injected [`PatternSampler`]. Recursion
/// through self-referential shapes is bounded by a depth cap; past the cap a
/// terminal default is substituted and a diagnostic logged, never a crash.
pub struct ShapeResolver<'a> {
    graph: &'a ShapeGraph,
    sampler: &'a dyn PatternSampler,
    max_depth: usize,
}

impl std::fmt::Debug for ShapeResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeResolver")
            .field("shapes", &self.graph.len())
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl<'a> ShapeResolver<'a> {
    /// Depth cap applied unless overridden.
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    /// Create a resolver over `graph` with the given pattern sampler.
    #[must_use]
    pub fn new(graph: &'a ShapeGraph, sampler: &'a dyn PatternSampler) -> Self {
        Self {
            graph,
            sampler,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the recursion depth cap.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Synthesize a value tree for the named shape.
    ///
    /// # Errors
    /// Returns [`SynthError`] only for precondition failures: a dangling
    /// shape reference or a required member the structure does not declare.
    pub fn resolve(&self, shape_name: &str) -> SynthResult<Value> {
        self.resolve_at(shape_name, 0)
    }

    fn resolve_at(&self, shape_name: &str, depth: usize) -> SynthResult<Value> {
        if depth >= self.max_depth {
            warn!(
                shape = %shape_name,
                max_depth = self.max_depth,
                "recursion cap reached, substituting terminal default"
            );
            return Ok(Value::String(FALLBACK_LITERAL.to_owned()));
        }

        match self.graph.get(shape_name)? {
            ShapeDef::String(string_shape) => Ok(self.resolve_string(string_shape)),
            ShapeDef::Integer | ShapeDef::Long => Ok(Value::Integer(1)),
            ShapeDef::Boolean => Ok(Value::String("false".to_owned())),
            ShapeDef::Double | ShapeDef::Float => Ok(Value::Float(2.0)),
            ShapeDef::Timestamp => Ok(Value::String(TIMESTAMP_LITERAL.to_owned())),
            ShapeDef::Blob => Ok(Value::String(BLOB_LITERAL.to_owned())),
            ShapeDef::List(list) => {
                let item = self.resolve_at(&list.member.shape, depth + 1)?;
                Ok(Value::List {
                    member_name: list
                        .member
                        .location_name
                        .clone()
                        .unwrap_or_else(|| DEFAULT_LIST_MEMBER.to_owned()),
                    items: vec![item],
                })
            }
            ShapeDef::Map(_) => {
                warn!(shape = %shape_name, "map synthesis not implemented, emitting placeholder");
                Ok(Value::String(MAP_PLACEHOLDER.to_owned()))
            }
            ShapeDef::Structure(structure) => {
                self.resolve_structure(shape_name, structure, depth)
            }
        }
    }

    fn resolve_string(&self, shape: &StringShape) -> Value {
        if let Some(pattern) = &shape.pattern {
            let sampled = self
                .sampler
                .sample(pattern)
                .unwrap_or_else(|| FALLBACK_LITERAL.to_owned());
            return Value::String(sampled);
        }
        if let Some(first) = shape.enum_values.as_ref().and_then(|e| e.first()) {
            return Value::String(first.clone());
        }
        if let Some(min) = shape.min {
            return Value::String(FALLBACK_LITERAL.repeat(min));
        }
        Value::String(PLACEHOLDER_STRING.to_owned())
    }

    fn resolve_structure(
        &self,
        shape_name: &str,
        structure: &StructureShape,
        depth: usize,
    ) -> SynthResult<Value> {
        let mut members = std::collections::BTreeMap::new();
        for member_name in &structure.required {
            let member_ref = structure.members.get(member_name).ok_or_else(|| {
                SynthError::MissingRequiredMember {
                    structure: shape_name.to_owned(),
                    member: member_name.clone(),
                }
            })?;
            let value = self.resolve_at(&member_ref.shape, depth + 1)?;
            members.insert(member_name.clone(), value);
        }
        Ok(Value::Structure(members))
    }
}
