//! Error types.
//!
//! Each concern gets its own enum; `Error` wraps them for the CLI.

use thiserror::Error;

/// Errors reported by a fetch backend.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("missing ENVKEY")]
    MissingToken,

    #[error("fetch backend not found: {0}")]
    BackendNotFound(String),

    #[error("failed to run fetch backend: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("{0}")]
    Rejected(String),

    #[error("fetch backend returned non UTF-8 output")]
    InvalidOutput,
}

/// Errors that stop the loader from populating the environment.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("missing ENVKEY")]
    MissingToken,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("problem parsing EnvKey's response: {0}")]
    MalformedResponse(String),
}

/// Settings file and option errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Rejected entries in a fetched mapping.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("empty variable name")]
    EmptyKey,

    #[error("invalid variable name {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
