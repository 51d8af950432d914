use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GqlctlError {
    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Validation(String),

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] serde_yaml::Error),
}

impl GqlctlError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GqlctlError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for GqlctlError {
    fn from(err: reqwest::Error) -> Self {
        GqlctlError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GqlctlError>;
