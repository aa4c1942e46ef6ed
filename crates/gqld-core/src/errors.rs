//! Errors raised while flattening a schema tree.
//!
//! The differ is total over its inputs, so this is the only error type the
//! core produces. Source resolution failures live in `gqld-source`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// An element of a named list has no `name` field.
    #[error("list element at '{path}' has no 'name' field")]
    MissingName { path: String },

    /// Two siblings produced the same flat key.
    #[error("duplicate flattened key '{key}'")]
    DuplicateKey { key: String },
}
