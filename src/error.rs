//! Error types for the client credential store.

use std::path::PathBuf;
use thiserror::Error;

/// Storage-related errors (load/save of the store file)
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("error reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("error writing config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error serializing config: {0}")]
    Serialize(String),
}

/// Command-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("context \"{0}\" is not defined")]
    ContextNotFound(String),

    #[error("no context is set, use `ctxconf context <name>` to select one")]
    NoContextSet,

    #[error("no contexts defined")]
    NoContextsDefined,

    #[error("no context specified")]
    NoContextSpecified,

    #[error("no contexts matched \"{0}\"")]
    NoMatch(String),

    #[error("context \"{0}\" already exists")]
    ContextExists(String),

    #[error("invalid context: {0}")]
    InvalidRecord(String),

    #[error("error decoding certificate: {0}")]
    CertDecode(String),

    #[error("error parsing certificate: {0}")]
    CertParse(String),

    #[error("unknown roles: {0}")]
    UnknownRoles(String),

    #[error("config file already exists: \"{}\"", .0.display())]
    StoreExists(PathBuf),

    #[error("this command requires exactly one target node, got {0}")]
    MultipleNodes(usize),

    #[error("integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("credential issuer unavailable: {0}")]
    IssuerUnavailable(String),

    #[error("error reading {what} {}: {source}", .path.display())]
    InputFile {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to get user input: {0}")]
    Prompt(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
