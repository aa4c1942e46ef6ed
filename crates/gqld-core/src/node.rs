//! Strongly typed schema tree.
//!
//! Introspection documents arrive as untyped JSON. They are converted into a
//! [`SchemaNode`] right after deserialization so the flattener never has to
//! inspect `serde_json::Value` directly.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// A terminal value: text, number, boolean, or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

/// One node of a schema description.
///
/// Object fields are held in a `BTreeMap`, so every rendering of a node has
/// its keys in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Leaf(Scalar),
    List(Vec<SchemaNode>),
    Object(BTreeMap<String, SchemaNode>),
}

impl SchemaNode {
    /// Shorthand for a text leaf.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf(Scalar::Text(value.into()))
    }

    /// The text of a text leaf, `None` for anything else.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Leaf(Scalar::Text(text)) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Look up a field of an object node.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Self> {
        self.as_object().and_then(|fields| fields.get(field))
    }

    /// Render a leaf as a path segment.
    ///
    /// Text is used as-is, numbers and booleans use their JSON spelling.
    /// Null and containers have no segment.
    #[must_use]
    pub fn path_segment(&self) -> Option<String> {
        match self {
            Self::Leaf(Scalar::Text(text)) => Some(text.clone()),
            Self::Leaf(Scalar::Number(number)) => Some(number.to_string()),
            Self::Leaf(Scalar::Bool(flag)) => Some(flag.to_string()),
            Self::Leaf(Scalar::Null) | Self::List(_) | Self::Object(_) => None,
        }
    }
}

impl From<Value> for SchemaNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Leaf(Scalar::Null),
            Value::Bool(flag) => Self::Leaf(Scalar::Bool(flag)),
            Value::Number(number) => Self::Leaf(Scalar::Number(number)),
            Value::String(text) => Self::Leaf(Scalar::Text(text)),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&SchemaNode> for Value {
    fn from(node: &SchemaNode) -> Self {
        match node {
            SchemaNode::Leaf(Scalar::Null) => Self::Null,
            SchemaNode::Leaf(Scalar::Bool(flag)) => Self::Bool(*flag),
            SchemaNode::Leaf(Scalar::Number(number)) => Self::Number(number.clone()),
            SchemaNode::Leaf(Scalar::Text(text)) => Self::String(text.clone()),
            SchemaNode::List(items) => Self::Array(items.iter().map(Self::from).collect()),
            SchemaNode::Object(fields) => Self::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl fmt::Display for SchemaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::from(self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn converts_nested_json() {
        let node = SchemaNode::from(json!({"name": "id", "args": [], "deprecated": false}));
        let fields = node.as_object().unwrap();

        assert_eq!(fields["name"], SchemaNode::text("id"));
        assert_eq!(fields["args"], SchemaNode::List(vec![]));
        assert_eq!(fields["deprecated"], SchemaNode::Leaf(Scalar::Bool(false)));
    }

    #[test]
    fn serializes_back_to_the_same_json() {
        let original = json!({"b": [1, "two", null], "a": {"ok": true}});
        let node = SchemaNode::from(original.clone());
        assert_eq!(serde_json::to_value(&node).unwrap(), original);
        assert_eq!(Value::from(&node), original);
    }

    #[test]
    fn deserializes_from_json_text() {
        let node: SchemaNode = serde_json::from_str(r#"{"kind": "SCALAR"}"#).unwrap();
        assert_eq!(node.get("kind"), Some(&SchemaNode::text("SCALAR")));
    }

    #[test]
    fn path_segment_covers_scalars_only() {
        assert_eq!(SchemaNode::text("id").path_segment().as_deref(), Some("id"));
        assert_eq!(
            SchemaNode::from(json!(7)).path_segment().as_deref(),
            Some("7")
        );
        assert_eq!(SchemaNode::from(json!(null)).path_segment(), None);
        assert_eq!(SchemaNode::from(json!({"a": 1})).path_segment(), None);
    }

    #[test]
    fn display_is_compact_json() {
        let node = SchemaNode::from(json!({"name": "Int", "kind": "SCALAR"}));
        assert_eq!(node.to_string(), r#"{"kind":"SCALAR","name":"Int"}"#);
    }
}
