//! Environment source
//!
//! - `CONLOG_LEVELS` - comma separated `name=level` pairs
//! - `CONLOG_TIME` - presence enables timestamps
//! - `CONLOG_WIDTH` - logger-name column width
//! - `CONLOG_DEFAULT` - process default level
//! - `CONLOG_PROFILE` - overrides the stored selected group

use std::collections::HashMap;

use crate::layer::{is_truthy, ConfigLayer};

pub const ENV_LEVELS: &str = "CONLOG_LEVELS";
pub const ENV_TIME: &str = "CONLOG_TIME";
pub const ENV_WIDTH: &str = "CONLOG_WIDTH";
pub const ENV_DEFAULT: &str = "CONLOG_DEFAULT";
pub const ENV_PROFILE: &str = "CONLOG_PROFILE";

/// A snapshot of environment variables
///
/// Tests build one from a map so they never touch the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Capture the `CONLOG_*` variables of the current process
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars()
                .filter(|(key, _)| key.starts_with("CONLOG_"))
                .collect(),
        }
    }

    /// Build a source from explicit pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Group requested through `CONLOG_PROFILE`
    pub fn profile(&self) -> Option<&str> {
        self.get(ENV_PROFILE).map(str::trim).filter(|name| !name.is_empty())
    }

    /// Convert the recognised variables into a configuration layer
    pub fn layer(&self) -> ConfigLayer {
        let mut layer = ConfigLayer {
            include_time: self.get(ENV_TIME).is_some_and(is_truthy),
            column_width: self.get(ENV_WIDTH).map(str::to_string),
            default_level: self.get(ENV_DEFAULT).map(str::to_string),
            ..ConfigLayer::default()
        };

        if let Some(levels) = self.get(ENV_LEVELS) {
            for pair in levels.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
                match pair.split_once(['=', ':']) {
                    Some((name, level)) if !name.trim().is_empty() => {
                        layer.set(name.trim(), level.trim())
                    }
                    _ => tracing::warn!("Ignoring malformed {ENV_LEVELS} entry: {pair}"),
                }
            }
        }
        layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conlog_rules::Level;

    #[test]
    fn test_levels_variable() {
        let env = EnvSource::from_pairs([(ENV_LEVELS, "com.a=debug, org.b:error,,broken, =x")]);
        let layer = env.layer();
        assert_eq!(layer.rules.get("com.a"), Some(Level::Debug));
        assert_eq!(layer.rules.get("org.b"), Some(Level::Error));
        assert_eq!(layer.rules.len(), 2);
    }

    #[test]
    fn test_settings_variables() {
        let env = EnvSource::from_pairs([
            (ENV_TIME, "1"),
            (ENV_WIDTH, "20"),
            (ENV_DEFAULT, "warn"),
        ]);
        let layer = env.layer();
        assert!(layer.include_time);
        assert_eq!(layer.column_width.as_deref(), Some("20"));
        assert_eq!(layer.default_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_empty_environment() {
        let layer = EnvSource::default().layer();
        assert_eq!(layer, ConfigLayer::default());
    }

    #[test]
    fn test_profile_override() {
        assert_eq!(
            EnvSource::from_pairs([(ENV_PROFILE, " Debugging ")]).profile(),
            Some("Debugging")
        );
        assert_eq!(EnvSource::from_pairs([(ENV_PROFILE, "  ")]).profile(), None);
        assert_eq!(EnvSource::default().profile(), None);
    }
}
