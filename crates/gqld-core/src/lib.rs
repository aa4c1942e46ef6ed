//! # gqld-core
//!
//! Schema flattening and diffing for gqldiff.
//!
//! Everything in this crate is pure: callers hand in two already-parsed
//! schema trees and get back a [`SchemaDiff`].
//!
//! ```
//! use gqld_core::{compute_diff, flatten, is_major, SchemaNode, SectionSelection};
//! use serde_json::json;
//!
//! let old = SchemaNode::from(json!({"types": [{"name": "Query", "kind": "OBJECT"}]}));
//! let new = SchemaNode::from(json!({"types": [{"name": "Query", "kind": "SCALAR"}]}));
//!
//! let diff = compute_diff(
//!     &flatten(&new)?,
//!     &flatten(&old)?,
//!     SectionSelection::default(),
//!     is_major,
//! );
//! assert!(diff.has_differences());
//! # Ok::<(), gqld_core::StructureError>(())
//! ```

pub mod diff;
pub mod errors;
pub mod filter;
pub mod flatten;
pub mod node;

pub use diff::{
    DiffEntry, DiffSection, Marker, SchemaDiff, Section, SectionSelection, additions, changes,
    compute_diff,
};
pub use errors::StructureError;
pub use filter::{MinorPolicy, include_all, is_major};
pub use flatten::{FlatSchema, Shape, classify, flatten};
pub use node::{Scalar, SchemaNode};
