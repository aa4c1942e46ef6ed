//! Differences between two flattened schemas.
//!
//! Deletions are not a separate algorithm: they are [`additions`] with the
//! arguments swapped and a [`Marker::Removed`] marker.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::flatten::FlatSchema;
use crate::node::SchemaNode;

/// Which side of the comparison a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Marker {
    #[serde(rename = "+")]
    Added,
    #[serde(rename = "-")]
    Removed,
}

impl Marker {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
        }
    }
}

/// Values for one key, by marker.
pub type DiffEntry = BTreeMap<Marker, SchemaNode>;

/// Entries of one section, keyed by flat path.
pub type DiffSection = BTreeMap<String, DiffEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Additions,
    Changes,
    Deletions,
}

impl Section {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Additions => '+',
            Self::Changes => '=',
            Self::Deletions => '-',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Additions => "additions",
            Self::Changes => "changes",
            Self::Deletions => "deletions",
        }
    }
}

/// Sections requested from [`compute_diff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSelection {
    pub additions: bool,
    pub deletions: bool,
    pub changes: bool,
}

impl Default for SectionSelection {
    fn default() -> Self {
        Self {
            additions: false,
            deletions: true,
            changes: true,
        }
    }
}

impl SectionSelection {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            additions: true,
            deletions: true,
            changes: true,
        }
    }
}

/// The requested sections of a diff. Sections that were not requested are
/// absent, requested sections may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SchemaDiff {
    sections: BTreeMap<Section, DiffSection>,
}

impl SchemaDiff {
    #[must_use]
    pub fn section(&self, section: Section) -> Option<&DiffSection> {
        self.sections.get(&section)
    }

    /// Requested sections in display order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &DiffSection)> {
        self.sections.iter().map(|(section, data)| (*section, data))
    }

    /// True when any requested section has at least one entry.
    #[must_use]
    pub fn has_differences(&self) -> bool {
        self.sections.values().any(|data| !data.is_empty())
    }
}

/// Keys of `new` missing from `old` whose value passes `filter`.
///
/// Call with the arguments swapped and [`Marker::Removed`] for deletions.
pub fn additions<F>(new: &FlatSchema, old: &FlatSchema, filter: F, marker: Marker) -> DiffSection
where
    F: Fn(&SchemaNode) -> bool,
{
    new.iter()
        .filter(|(key, value)| !old.contains_key(key) && filter(*value))
        .map(|(key, value)| (key.clone(), DiffEntry::from([(marker, value.clone())])))
        .collect()
}

/// Keys present on both sides with differing values.
///
/// A pair is reported only when both values pass `filter`. If either side
/// is minor the whole pair is dropped.
pub fn changes<F>(new: &FlatSchema, old: &FlatSchema, filter: F) -> DiffSection
where
    F: Fn(&SchemaNode) -> bool,
{
    new.iter()
        .filter_map(|(key, new_value)| {
            let old_value = old.get(key)?;
            (new_value != old_value && filter(new_value) && filter(old_value)).then(|| {
                (
                    key.clone(),
                    DiffEntry::from([
                        (Marker::Added, new_value.clone()),
                        (Marker::Removed, old_value.clone()),
                    ]),
                )
            })
        })
        .collect()
}

/// Compute the requested sections for a new/old pair.
pub fn compute_diff<F>(
    new: &FlatSchema,
    old: &FlatSchema,
    selection: SectionSelection,
    filter: F,
) -> SchemaDiff
where
    F: Fn(&SchemaNode) -> bool,
{
    let mut sections = BTreeMap::new();
    if selection.additions {
        sections.insert(
            Section::Additions,
            additions(new, old, &filter, Marker::Added),
        );
    }
    if selection.deletions {
        sections.insert(
            Section::Deletions,
            additions(old, new, &filter, Marker::Removed),
        );
    }
    if selection.changes {
        sections.insert(Section::Changes, changes(new, old, &filter));
    }

    for (section, data) in &sections {
        tracing::debug!(section = section.name(), entries = data.len(), "computed diff section");
    }

    SchemaDiff { sections }
}
