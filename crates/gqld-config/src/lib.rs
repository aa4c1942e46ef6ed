//! # gqld-config
//!
//! Layered configuration loading for gqldiff using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GQLDIFF_*` prefix, `__` as separator)
//! 2. Project-level `.gqldiff.toml`
//! 3. User-level `~/.config/gqldiff/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top of the loaded config by the CLI.
//!
//! # Environment Variable Mapping
//!
//! `GQLDIFF_REPORT__MINOR=true` -> `report.minor`,
//! `GQLDIFF_HTTP__TIMEOUT_SECS=5` -> `http.timeout_secs`.
//!
//! # Usage
//!
//! ```no_run
//! use gqld_config::GqlDiffConfig;
//!
//! let config = GqlDiffConfig::load_with_dotenv().expect("config");
//! if config.report.minor {
//!     println!("reporting description changes too");
//! }
//! ```

mod auth;
mod error;
mod http;
mod report;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use http::HttpConfig;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const PROJECT_CONFIG_FILE: &str = ".gqldiff.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GqlDiffConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl GqlDiffConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// Credentials for remote endpoints (`GQL_AUTH_NEW`, `GQL_AUTH_OLD`) are
    /// commonly kept there.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GQLDIFF_").split("__"))
    }

    /// Reject values that would make the tool unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        for (field, value) in [
            ("auth.new_env", &self.auth.new_env),
            ("auth.old_env", &self.auth.old_env),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "environment variable name must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gqldiff").join("config.toml"))
    }
}
