//! CLI error type

use std::path::PathBuf;

use conlog_config::ConfigError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output: {0}")]
    Write(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot encode rules as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown level '{0}' (expected one of trace, debug, info, warn, error, off)")]
    UnknownLevel(String),
}
