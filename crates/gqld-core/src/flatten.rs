//! Schema flattening.
//!
//! Turns a nested [`SchemaNode`] into a [`FlatSchema`]: a mapping from a
//! dotted path to the value found there. Two schemas with the same shape
//! flatten to the same key set, which is what makes them comparable.
//!
//! Each node is classified by [`classify`]:
//!
//! 1. A list whose elements are all non-empty objects is a *named list*.
//!    Each element is descended into under its `name` field. If any element
//!    has a `name` that is null or a container, the list is terminal instead.
//! 2. An object with at least one list-valued field is a *record*. Every
//!    field is descended into under its own key.
//! 3. Anything else is *terminal* and stored whole, including objects that
//!    hold no lists (e.g. a `type` reference like `{"kind": .., "name": ..}`).

use std::collections::BTreeMap;
use std::collections::btree_map::{Entry, Iter, Keys};

use serde::Serialize;

use crate::errors::StructureError;
use crate::node::SchemaNode;

const SEPARATOR: char = '.';

/// How the flattener treats a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    /// A list of non-empty objects, addressed by their `name` field.
    NamedList(&'a [SchemaNode]),
    /// An object with at least one list-valued field.
    Record(&'a BTreeMap<String, SchemaNode>),
    /// Stored verbatim under the accumulated path.
    Terminal,
}

/// Classify a node. Rules are applied in precedence order.
#[must_use]
pub fn classify(node: &SchemaNode) -> Shape<'_> {
    match node {
        SchemaNode::List(items) if items.iter().all(is_named_element) => Shape::NamedList(items),
        SchemaNode::Object(fields) if fields.values().any(SchemaNode::is_list) => {
            Shape::Record(fields)
        }
        _ => Shape::Terminal,
    }
}

// A missing `name` still counts; the flattener reports it.
fn is_named_element(item: &SchemaNode) -> bool {
    item.as_object().is_some_and(|fields| {
        !fields.is_empty()
            && fields
                .get("name")
                .is_none_or(|name| name.path_segment().is_some())
    })
}

/// Flat mapping from dotted path to terminal value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlatSchema(BTreeMap<String, SchemaNode>);

impl FlatSchema {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, SchemaNode> {
        self.0.iter()
    }

    pub fn keys(&self) -> Keys<'_, String, SchemaNode> {
        self.0.keys()
    }
}

impl<'a> IntoIterator for &'a FlatSchema {
    type Item = (&'a String, &'a SchemaNode);
    type IntoIter = Iter<'a, String, SchemaNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, SchemaNode)> for FlatSchema {
    fn from_iter<I: IntoIterator<Item = (K, SchemaNode)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}

/// Flatten a schema tree.
///
/// # Errors
///
/// Returns [`StructureError`] when a named-list element has no `name` field
/// or when two nodes resolve to the same key.
pub fn flatten(root: &SchemaNode) -> Result<FlatSchema, StructureError> {
    let mut out = BTreeMap::new();
    flatten_into(root, String::new(), &mut out)?;
    tracing::debug!(keys = out.len(), "flattened schema");
    Ok(FlatSchema(out))
}

// `prefix` always starts with a separator once past the root; it is stripped
// when the key is recorded.
fn flatten_into(
    node: &SchemaNode,
    prefix: String,
    out: &mut BTreeMap<String, SchemaNode>,
) -> Result<(), StructureError> {
    match classify(node) {
        Shape::NamedList(items) => {
            for item in items {
                // `classify` only admits names that have a segment.
                let segment = item
                    .get("name")
                    .and_then(SchemaNode::path_segment)
                    .ok_or_else(|| StructureError::MissingName {
                        path: display_key(&prefix).to_string(),
                    })?;
                flatten_into(item, format!("{prefix}{SEPARATOR}{segment}"), out)?;
            }
        }
        Shape::Record(fields) => {
            for (field, value) in fields {
                flatten_into(value, format!("{prefix}{SEPARATOR}{field}"), out)?;
            }
        }
        Shape::Terminal => {
            let key = display_key(&prefix).to_string();
            match out.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(StructureError::DuplicateKey {
                        key: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(node.clone());
                }
            }
        }
    }
    Ok(())
}

fn display_key(prefix: &str) -> &str {
    prefix.strip_prefix(SEPARATOR).unwrap_or(prefix)
}
