//! Minor-change policy.
//!
//! A filter decides whether a value is worth reporting. The default,
//! [`is_major`], suppresses free text such as descriptions while keeping
//! enum-like codes (`OBJECT`, `NON_NULL`) and every non-text value.

use crate::node::SchemaNode;

/// Reports everything except text that is not entirely upper-case.
///
/// Text counts as upper-case when it has at least one cased character and
/// no lower-case ones, so `"INT_2"` is major while `"123"` and `""` are not.
#[must_use]
pub fn is_major(value: &SchemaNode) -> bool {
    value.as_text().is_none_or(is_upper)
}

/// Reports every value.
#[must_use]
pub const fn include_all(_value: &SchemaNode) -> bool {
    true
}

fn is_upper(text: &str) -> bool {
    let mut cased = false;
    for ch in text.chars() {
        if ch.is_lowercase() {
            return false;
        }
        cased |= ch.is_uppercase();
    }
    cased
}

/// Whether minor (free text) differences are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MinorPolicy {
    #[default]
    Exclude,
    Include,
}

impl MinorPolicy {
    #[must_use]
    pub const fn from_include(include_minor: bool) -> Self {
        if include_minor {
            Self::Include
        } else {
            Self::Exclude
        }
    }

    /// The predicate implementing this policy.
    #[must_use]
    pub fn filter(self) -> fn(&SchemaNode) -> bool {
        match self {
            Self::Exclude => is_major,
            Self::Include => include_all,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    #[rstest]
    #[case::enum_code(json!("OBJECT"), true)]
    #[case::code_with_digits(json!("INT_2"), true)]
    #[case::description(json!("The user id"), false)]
    #[case::lowercase_code(json!("object"), false)]
    #[case::digits_only(json!("123"), false)]
    #[case::empty(json!(""), false)]
    #[case::boolean(json!(false), true)]
    #[case::number(json!(0), true)]
    #[case::null(json!(null), true)]
    #[case::object(json!({"name": "lower"}), true)]
    #[case::list(json!(["lower"]), true)]
    fn classifies_major_values(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_major(&SchemaNode::from(value)), expected);
    }

    #[test]
    fn include_all_accepts_free_text() {
        assert!(include_all(&SchemaNode::text("any description")));
    }

    #[test]
    fn policy_selects_predicate() {
        let text = SchemaNode::text("Some description");
        assert!(!MinorPolicy::Exclude.filter()(&text));
        assert!(MinorPolicy::Include.filter()(&text));
        assert_eq!(MinorPolicy::from_include(true), MinorPolicy::Include);
        assert_eq!(MinorPolicy::default(), MinorPolicy::Exclude);
    }
}
