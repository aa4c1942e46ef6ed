//! # gqld-source
//!
//! Resolves a schema source identifier into a [`SchemaNode`].
//!
//! A source is either a GraphQL endpoint URL, which is sent the standard
//! introspection query, or a path to a saved introspection document. Either
//! way the result is the `__schema` object, ready for flattening.

mod error;
mod http;
pub mod introspection;

pub use error::SourceError;
pub use introspection::{INTROSPECTION_QUERY, schema_from_document};

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use gqld_core::SchemaNode;
use reqwest::Url;
use reqwest::header::AUTHORIZATION;
use serde_json::{Value, json};

use crate::http::check_response;

/// Where a schema comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Url(Url),
    File(PathBuf),
}

impl SchemaSource {
    /// Interpret a command-line value.
    ///
    /// Anything with both a scheme and a host is a URL; everything else,
    /// including Windows drive paths and `file:///` URLs, is a local path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match Url::parse(value) {
            Ok(url) if url.host_str().is_some_and(|host| !host.is_empty()) => Self::Url(url),
            _ => Self::File(PathBuf::from(value)),
        }
    }
}

impl fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and loads schemas.
pub struct SchemaResolver {
    http: reqwest::Client,
}

impl SchemaResolver {
    /// Create a resolver whose HTTP requests use the given timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Resolve a source into its `__schema` tree.
    ///
    /// `auth_env` names the environment variable whose value, when set, is
    /// sent as the `Authorization` header. It is ignored for files.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failures, rejected credentials,
    /// unreadable files, or content that is not an introspection document.
    pub async fn resolve(
        &self,
        source: &SchemaSource,
        auth_env: Option<&str>,
    ) -> Result<SchemaNode, SourceError> {
        tracing::info!(%source, "resolving schema");
        match source {
            SchemaSource::Url(url) => self.fetch(url, auth_env).await,
            SchemaSource::File(path) => load_file(path).await,
        }
    }

    async fn fetch(&self, url: &Url, auth_env: Option<&str>) -> Result<SchemaNode, SourceError> {
        let mut request = self
            .http
            .post(url.clone())
            .json(&json!({ "query": INTROSPECTION_QUERY }));

        if let Some(token) = auth_env.and_then(|name| std::env::var(name).ok()) {
            request = request.header(AUTHORIZATION, token);
        } else if let Some(name) = auth_env {
            tracing::debug!(env = name, "no credential set; sending unauthenticated request");
        }

        let resp = check_response(request.send().await?, auth_env).await?;
        let document: Value = resp.json().await?;
        schema_from_document(document)
    }
}

/// Load a saved introspection document from disk.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the file cannot be read and
/// [`SourceError::InvalidDocument`] if it is not an introspection document.
pub async fn load_file(path: &std::path::Path) -> Result<SchemaNode, SourceError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let document: Value = serde_json::from_str(&text)
        .map_err(|error| SourceError::InvalidDocument(error.to_string()))?;
    schema_from_document(document)
}
