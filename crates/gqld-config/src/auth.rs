//! Credential lookup for remote schema endpoints.

use serde::{Deserialize, Serialize};

fn default_new_env() -> String {
    "GQL_AUTH_NEW".to_string()
}

fn default_old_env() -> String {
    "GQL_AUTH_OLD".to_string()
}

/// Names of the environment variables holding the `Authorization` header
/// value for each side of the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default = "default_new_env")]
    pub new_env: String,

    #[serde(default = "default_old_env")]
    pub old_env: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            new_env: default_new_env(),
            old_env: default_old_env(),
        }
    }
}
