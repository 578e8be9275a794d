//! The synthesized value tree.
//!
//! A [`Value`] mirrors the structure of the input shape it was synthesized
//! from. The json protocols serialize the tree verbatim; the query protocol
//! flattens it into dotted field paths (`Parent.Child`, `List.member.1`).

use std::collections::BTreeMap;

/// One node of a synthesized input tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string scalar. Booleans, timestamps, and blob placeholders are also
    /// carried as their string literals.
    String(String),
    /// An integer scalar.
    Integer(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A sequence, tagged with the wire element name its items flatten under.
    List {
        /// Element name used in dotted query paths (`member` unless the model
        /// overrides it).
        member_name: String,
        /// The sequence elements.
        items: Vec<Value>,
    },
    /// A record of member name to value.
    Structure(BTreeMap<String, Value>),
}

impl Value {
    /// The empty input tree, used for operations without an input shape and
    /// for `no_params` invocations.
    #[must_use]
    pub fn empty() -> Self {
        Self::Structure(BTreeMap::new())
    }

    /// Whether this is a structure with no members.
    #[must_use]
    pub fn is_empty_structure(&self) -> bool {
        matches!(self, Self::Structure(members) if members.is_empty())
    }

    /// Serialize the tree as JSON, as the json and rest-json protocols
    /// transmit it.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Integer(i) => serde_json::Value::Number((*i).into()),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::List { items, .. } => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Structure(members) => serde_json::Value::Object(
                members
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }

    /// Flatten the tree into dotted query-protocol field pairs.
    ///
    /// Structure members join with `.`; list elements serialize as
    /// `<path>.<member_name>.<index>` with 1-based indices.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        self.flatten_into("", &mut pairs);
        pairs
    }

    fn flatten_into(&self, prefix: &str, pairs: &mut Vec<(String, String)>) {
        match self {
            Self::String(s) => pairs.push((prefix.to_owned(), s.clone())),
            Self::Integer(i) => pairs.push((prefix.to_owned(), i.to_string())),
            Self::Float(f) => pairs.push((prefix.to_owned(), format!("{f:?}"))),
            Self::List { member_name, items } => {
                for (index, item) in items.iter().enumerate() {
                    let path = join_path(&join_path(prefix, member_name), &(index + 1).to_string());
                    item.flatten_into(&path, pairs);
                }
            }
            Self::Structure(members) => {
                for (name, value) in members {
                    value.flatten_into(&join_path(prefix, name), pairs);
                }
            }
        }
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}.{segment}")
    }
}
