//! Conlog Config - configuration sources for the console logger
//!
//! This crate turns the places a user can configure loggers into one
//! immutable [`ConsoleConfig`] snapshot:
//! - the selected profile of a [`ProfileStore`] (rule text + display options)
//! - a flat properties file (`conlog.properties`)
//! - `CONLOG_*` environment variables
//!
//! # Usage
//! ```rust,ignore
//! use conlog_config::{ConfigLoader, EnvSource, JsonFileProfileStore};
//!
//! let store = JsonFileProfileStore::new("conlog-profiles.json");
//! let config = ConfigLoader::new()
//!     .with_store(&store)
//!     .with_properties_file("conlog.properties")
//!     .with_env(EnvSource::from_process())
//!     .load();
//! ```

mod env;
mod error;
mod layer;
mod loader;
mod profile;
mod properties;
mod settings;
mod store;

pub use env::{EnvSource, ENV_DEFAULT, ENV_LEVELS, ENV_PROFILE, ENV_TIME, ENV_WIDTH};
pub use error::{ConfigError, ConfigResult};
pub use layer::{ConfigLayer, KEY_DEFAULT, KEY_TIME, KEY_WIDTH};
pub use loader::{ConfigLoader, ConsoleConfig};
pub use profile::{Profile, ProfileBook};
pub use properties::{parse_properties, read_properties, PROPERTIES_FILE};
pub use settings::{
    parse_column_width, DisplaySettings, DEFAULT_COLUMN_WIDTH, MAX_COLUMN_WIDTH,
};
pub use store::{JsonFileProfileStore, MemoryProfileStore, ProfileStore, PROFILE_FILE};

/// Prefix used when exporting rules into a broader properties namespace
pub const KEY_PREFIX: &str = "conlog.";
