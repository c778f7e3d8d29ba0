use std::path::PathBuf;

use thiserror::Error;

/// Failures while assembling a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
    #[error("failed to load env file {path}: {message}")]
    EnvFile { path: PathBuf, message: String },
    #[error("environment variable {name} has invalid value `{value}`")]
    InvalidEnv { name: String, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
