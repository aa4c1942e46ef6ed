//! End-to-end flatten + diff behaviour over introspection-shaped input.

use std::collections::BTreeSet;

use gqld_core::{
    FlatSchema, Marker, SchemaNode, Section, SectionSelection, additions, changes, compute_diff,
    flatten, include_all, is_major,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn schema(user_fields: Value, description: &str) -> SchemaNode {
    SchemaNode::from(json!({
        "queryType": {"name": "Query"},
        "mutationType": null,
        "types": [
            {
                "kind": "OBJECT",
                "name": "Query",
                "description": description,
                "interfaces": [],
                "fields": [
                    {
                        "name": "user",
                        "description": "Look up a user",
                        "isDeprecated": false,
                        "args": [
                            {"name": "id", "type": {"kind": "NON_NULL", "name": null}}
                        ],
                        "type": {"kind": "OBJECT", "name": "User"}
                    }
                ]
            },
            {
                "kind": "OBJECT",
                "name": "User",
                "description": null,
                "interfaces": [],
                "fields": user_fields
            }
        ],
        "directives": [
            {"name": "skip", "locations": ["FIELD"], "args": [{"name": "if", "type": {"kind": "NON_NULL", "name": null}}]}
        ]
    }))
}

fn field(name: &str, kind: &str, type_name: &str) -> Value {
    json!({
        "name": name,
        "args": [],
        "isDeprecated": false,
        "type": {"kind": kind, "name": type_name}
    })
}

fn old_schema() -> SchemaNode {
    schema(
        json!([field("id", "SCALAR", "ID"), field("email", "SCALAR", "String")]),
        "Root query",
    )
}

fn new_schema() -> SchemaNode {
    schema(
        json!([field("id", "SCALAR", "Int"), field("name", "SCALAR", "String")]),
        "The root query",
    )
}

fn keys(flat: &FlatSchema) -> BTreeSet<&str> {
    flat.keys().map(String::as_str).collect()
}

#[test]
fn same_shape_gives_same_key_set() {
    let a = flatten(&schema(json!([field("id", "SCALAR", "ID")]), "A")).unwrap();
    let b = flatten(&schema(json!([field("id", "LIST", "Int")]), "B")).unwrap();
    assert_eq!(keys(&a), keys(&b));
}

#[test]
fn identical_schemas_have_no_differences() {
    let a = flatten(&old_schema()).unwrap();
    let b = flatten(&old_schema()).unwrap();

    for filter in [is_major as fn(&SchemaNode) -> bool, include_all] {
        let diff = compute_diff(&a, &b, SectionSelection::all(), filter);
        assert!(!diff.has_differences());
    }
}

#[test]
fn additions_and_deletions_partition_the_symmetric_difference() {
    let new = flatten(&new_schema()).unwrap();
    let old = flatten(&old_schema()).unwrap();

    let added = additions(&new, &old, include_all, Marker::Added);
    let deleted = additions(&old, &new, include_all, Marker::Removed);

    let added_keys: BTreeSet<&str> = added.keys().map(String::as_str).collect();
    let deleted_keys: BTreeSet<&str> = deleted.keys().map(String::as_str).collect();
    assert!(added_keys.is_disjoint(&deleted_keys));

    let symmetric: BTreeSet<&str> = keys(&new).symmetric_difference(&keys(&old)).copied().collect();
    let union: BTreeSet<&str> = added_keys.union(&deleted_keys).copied().collect();
    assert_eq!(union, symmetric);

    assert!(added_keys.contains("types.User.fields.name.type"));
    assert!(deleted_keys.contains("types.User.fields.email.type"));
}

#[test]
fn changes_never_overlap_additions_or_deletions() {
    let new = flatten(&new_schema()).unwrap();
    let old = flatten(&old_schema()).unwrap();

    let diff = compute_diff(&new, &old, SectionSelection::all(), include_all);
    let changed = diff.section(Section::Changes).unwrap();

    for section in [Section::Additions, Section::Deletions] {
        for key in diff.section(section).unwrap().keys() {
            assert!(!changed.contains_key(key), "{key} reported twice");
        }
    }
}

#[test]
fn type_reference_change_is_major() {
    let new = flatten(&new_schema()).unwrap();
    let old = flatten(&old_schema()).unwrap();

    let changed = changes(&new, &old, is_major);

    assert_eq!(
        changed.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["types.User.fields.id.type"]
    );
    assert_eq!(
        Value::from(&changed["types.User.fields.id.type"][&Marker::Added]),
        json!({"kind": "SCALAR", "name": "Int"})
    );
}

#[test]
fn stricter_filter_reports_a_subset() {
    let new = flatten(&new_schema()).unwrap();
    let old = flatten(&old_schema()).unwrap();

    let loose = changes(&new, &old, include_all);
    let strict = changes(&new, &old, is_major);

    assert!(strict.keys().all(|key| loose.contains_key(key)));
    assert!(loose.contains_key("types.Query.description"));
    assert!(!strict.contains_key("types.Query.description"));
}
