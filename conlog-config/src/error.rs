//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for configuration operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing a configuration file failed
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile book could not be (de)serialized
    #[error("Invalid profile store: {0}")]
    Json(#[from] serde_json::Error),

    /// Column width is not an integer in the supported range
    #[error("Column width ({0}) is not a valid integer between 0 and 99")]
    InvalidWidth(String),

    /// A group with the same name (ignoring case) already exists
    #[error("Duplicate group name: {0}. Please assign a different group name.")]
    DuplicateGroup(String),

    /// The named group does not exist
    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    /// Group names must not be blank
    #[error("Group name must not be empty")]
    EmptyGroupName,

    /// The in-memory store lock was poisoned
    #[error("Lock poisoned")]
    Poisoned,
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}
