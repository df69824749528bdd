//! Layered configuration loading
//!
//! Order (later wins per key): selected profile, properties file, environment.
//! Loading never fails: unreadable sources are reported and skipped.

use std::path::PathBuf;

use conlog_rules::{Level, RuleMap};

use crate::env::EnvSource;
use crate::layer::ConfigLayer;
use crate::properties::read_properties;
use crate::settings::DisplaySettings;
use crate::store::ProfileStore;

/// Immutable configuration snapshot handed to the logger factory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub settings: DisplaySettings,
    pub default_level: Level,
    pub rules: RuleMap,
}

/// Builder collecting the configuration sources
#[derive(Default)]
pub struct ConfigLoader<'a> {
    store: Option<&'a dyn ProfileStore>,
    properties: Option<PathBuf>,
    env: EnvSource,
}

impl<'a> ConfigLoader<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(mut self, store: &'a dyn ProfileStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_properties_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.properties = Some(path.into());
        self
    }

    pub fn with_env(mut self, env: EnvSource) -> Self {
        self.env = env;
        self
    }

    /// Merge every configured source into one snapshot
    pub fn load(self) -> ConsoleConfig {
        let mut config = ConsoleConfig::default();
        for layer in self.layers() {
            layer.apply_to(
                &mut config.settings,
                &mut config.default_level,
                &mut config.rules,
            );
        }
        tracing::debug!(
            rules = config.rules.len(),
            width = config.settings.column_width,
            include_time = config.settings.include_time,
            "Loaded console logger configuration"
        );
        config
    }

    fn layers(&self) -> Vec<ConfigLayer> {
        let mut layers = Vec::with_capacity(3);
        if let Some(layer) = self.profile_layer() {
            layers.push(layer);
        }
        if let Some(path) = &self.properties {
            match read_properties(path) {
                Ok(Some(layer)) => layers.push(layer),
                Ok(None) => tracing::debug!("No properties file at {}", path.display()),
                Err(err) => tracing::warn!("Skipping properties file: {err}"),
            }
        }
        layers.push(self.env.layer());
        layers
    }

    fn profile_layer(&self) -> Option<ConfigLayer> {
        let store = self.store?;
        let book = match store.load() {
            Ok(book) => book,
            Err(err) => {
                tracing::warn!("Skipping profile store: {err}");
                return None;
            }
        };

        let name = match self.env.profile() {
            Some(name) => name.to_string(),
            None => book.selected.clone()?,
        };
        match book.profile(&name) {
            Some(profile) => Some(profile.layer()),
            None => {
                tracing::warn!("Selected group '{name}' does not exist");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ENV_LEVELS, ENV_PROFILE, ENV_TIME, ENV_WIDTH};
    use crate::profile::{Profile, ProfileBook};
    use crate::store::MemoryProfileStore;

    fn store_with(groups: &[(&str, &str)], selected: Option<&str>) -> MemoryProfileStore {
        let mut book = ProfileBook::new();
        for (name, text) in groups {
            book.save_profile(name, Profile::from_user(text, false, 10)).unwrap();
        }
        if let Some(name) = selected {
            book.select(name).unwrap();
        }
        MemoryProfileStore::with_book(book)
    }

    #[test]
    fn test_empty_load() {
        let config = ConfigLoader::new().load();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.default_level, Level::Info);
        assert_eq!(config.settings.column_width, 10);
    }

    #[test]
    fn test_selected_profile_rules() {
        let store = store_with(&[("dev", "com.mypackage.:trace\nMyClass")], Some("dev"));
        let config = ConfigLoader::new().with_store(&store).load();
        assert_eq!(config.rules.get("com.mypackage.MyClass"), Some(Level::Trace));
    }

    #[test]
    fn test_no_selection_means_no_profile_rules() {
        let store = store_with(&[("dev", "a.b:trace")], None);
        let config = ConfigLoader::new().with_store(&store).load();
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_env_profile_overrides_selection() {
        let store = store_with(&[("dev", "a.b:trace"), ("quiet", "a.b:off")], Some("dev"));
        let env = EnvSource::from_pairs([(ENV_PROFILE, "quiet")]);
        let config = ConfigLoader::new().with_store(&store).with_env(env).load();
        assert_eq!(config.rules.get("a.b"), Some(Level::Off));
    }

    #[test]
    fn test_layer_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conlog.properties");
        std::fs::write(&path, "a.b=debug\nc.d=warn\nwidth=14\n").unwrap();

        let store = store_with(&[("dev", "a.b:trace\nx.y:error")], Some("dev"));
        let env = EnvSource::from_pairs([(ENV_LEVELS, "c.d=error"), (ENV_TIME, "")]);
        let config = ConfigLoader::new()
            .with_store(&store)
            .with_properties_file(&path)
            .with_env(env)
            .load();

        assert_eq!(config.rules.get("x.y"), Some(Level::Error));
        assert_eq!(config.rules.get("a.b"), Some(Level::Debug));
        assert_eq!(config.rules.get("c.d"), Some(Level::Error));
        assert_eq!(config.settings.column_width, 14);
        assert!(config.settings.include_time);
    }

    #[test]
    fn test_invalid_width_falls_back() {
        let env = EnvSource::from_pairs([(ENV_WIDTH, "huge")]);
        let config = ConfigLoader::new().with_env(env).load();
        assert_eq!(config.settings.column_width, 10);
    }

    #[test]
    fn test_missing_properties_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::new()
            .with_properties_file(dir.path().join("absent.properties"))
            .load();
        assert!(config.rules.is_empty());
    }
}
