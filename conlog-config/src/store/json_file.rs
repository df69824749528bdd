//! JSON-file profile store

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::profile::ProfileBook;
use crate::store::ProfileStore;

/// Default profile store file name
pub const PROFILE_FILE: &str = "conlog-profiles.json";

/// Stores the whole profile book as one JSON document
#[derive(Debug, Clone)]
pub struct JsonFileProfileStore {
    path: PathBuf,
}

impl JsonFileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonFileProfileStore {
    fn load(&self) -> ConfigResult<ProfileBook> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No profile store at {}, starting empty", self.path.display());
                return Ok(ProfileBook::default());
            }
            Err(err) => return Err(ConfigError::io(&self.path, err)),
        };
        if text.trim().is_empty() {
            return Ok(ProfileBook::default());
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn store(&self, book: &ProfileBook) -> ConfigResult<()> {
        let json = serde_json::to_string_pretty(book)?;
        std::fs::write(&self.path, json).map_err(|err| ConfigError::io(&self.path, err))
    }
}
