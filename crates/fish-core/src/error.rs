//! Error types for fish-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fish-core
#[derive(Debug, Error)]
pub enum Error {
    /// A required source table is absent for the active locale
    #[error("source table '{table}' not found (expected '{path}')")]
    SourceMissing { table: String, path: PathBuf },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file is not valid JSON for the expected shape
    #[error("failed to parse JSON '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record does not split into the expected fields
    #[error("malformed record '{key}' in '{table}': {message}")]
    MalformedRecord {
        table: String,
        key: String,
        message: String,
    },

    /// Locale code that is not one of the supported locales
    #[error("unknown locale code: {0}")]
    UnknownLocale(String),

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::MalformedRecord`]
    pub fn malformed(
        table: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::MalformedRecord {
            table: table.into(),
            key: key.into(),
            message: message.into(),
        }
    }
}
