//! The introspection query and extraction of `__schema` from its result.

use gqld_core::SchemaNode;
use serde_json::Value;

use crate::error::SourceError;

/// Standard full introspection query, matching what GraphQL tooling saves
/// as `schema.json`.
pub const INTROSPECTION_QUERY: &str = r"
query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
    directives {
      name
      description
      locations
      args {
        ...InputValue
      }
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}

fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
";

/// Take the `__schema` object out of an introspection document.
///
/// Accepts the usual `{"data": {"__schema": ...}}` response envelope and a
/// bare `{"__schema": ...}`.
///
/// # Errors
///
/// [`SourceError::GraphQl`] when the document carries an `errors` array
/// instead of a schema, [`SourceError::InvalidDocument`] otherwise.
pub fn schema_from_document(mut document: Value) -> Result<SchemaNode, SourceError> {
    if let Some(schema) = document
        .pointer_mut("/data/__schema")
        .filter(|schema| schema.is_object())
    {
        return Ok(SchemaNode::from(schema.take()));
    }
    if let Some(schema) = document
        .get_mut("__schema")
        .filter(|schema| schema.is_object())
    {
        return Ok(SchemaNode::from(schema.take()));
    }
    Err(missing_schema(&document))
}

fn missing_schema(document: &Value) -> SourceError {
    match document.get("errors").and_then(Value::as_array) {
        Some(errors) if !errors.is_empty() => SourceError::GraphQl(
            errors
                .iter()
                .map(|error| {
                    error
                        .get("message")
                        .and_then(Value::as_str)
                        .map_or_else(|| error.to_string(), str::to_string)
                })
                .collect(),
        ),
        _ => SourceError::InvalidDocument("missing 'data.__schema' object".to_string()),
    }
}
