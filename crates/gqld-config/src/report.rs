//! Which differences are reported, and how the process exits.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Report keys only present in the new schema.
    #[serde(default)]
    pub additions: bool,

    /// Report keys only present in the old schema.
    #[serde(default = "default_true")]
    pub deletions: bool,

    /// Report keys whose value changed.
    #[serde(default = "default_true")]
    pub changes: bool,

    /// Include free-text (non upper-case) differences such as descriptions.
    #[serde(default)]
    pub minor: bool,

    /// Exit non-zero when any reported section is non-empty.
    #[serde(default = "default_true")]
    pub fail: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            additions: false,
            deletions: true,
            changes: true,
            minor: false,
            fail: true,
        }
    }
}
