//! Schema source error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while obtaining a schema from a URL or a file.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error (connection refused, timeout, bad response body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint rejected the credentials.
    #[error("{status} Unauthorized{}", auth_hint(.auth_env.as_deref()))]
    Unauthorized {
        status: u16,
        /// Environment variable the credential is read from, if any.
        auth_env: Option<String>,
    },

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The endpoint answered the introspection query with GraphQL errors.
    #[error("endpoint returned errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// A local schema file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not an introspection document.
    #[error("File content is not a valid graphql schema: {0}")]
    InvalidDocument(String),
}

fn auth_hint(auth_env: Option<&str>) -> String {
    auth_env
        .map(|name| format!(" : Try setting {name} in the environment."))
        .unwrap_or_default()
}
