//! Error types for the battery health monitor.
//!
//! The analytics core is infallible; errors only arise at the edges, when
//! configuration is read and when readings are fetched from a source.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Reading source errors
    #[error("reading source error")]
    Source(#[from] SourceError),

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),

    /// Required configuration value is missing
    #[error("missing required configuration: {0}")]
    Missing(String),

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Errors raised while fetching readings.
#[derive(Error, Debug)]
pub enum SourceError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint does not exist
    #[error("battery data not found at {url}")]
    NotFound { url: String },

    /// Server returned an error status
    #[error("failed to fetch battery data (status {status}): {message}")]
    ServerError { status: u16, message: String },

    /// Static data file could not be read
    #[error("failed to read battery data from {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Payload could not be decoded
    #[error("malformed battery data: {0}")]
    Parse(#[from] ParseError),
}

/// Payload decoding errors.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Body is not valid JSON or a record has the wrong shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Body parsed but carries no `data` field
    #[error("response has no `data` field")]
    MissingData,
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }

    /// Creates a new missing configuration error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing(field.into())
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Creates an error from a non-success HTTP status and response body.
    pub fn from_status(url: impl Into<String>, status: reqwest::StatusCode, body: String) -> Self {
        if status == reqwest::StatusCode::NOT_FOUND {
            Self::NotFound { url: url.into() }
        } else {
            Self::ServerError {
                status: status.as_u16(),
                message: body,
            }
        }
    }

    /// Creates an I/O error for the given data file.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
