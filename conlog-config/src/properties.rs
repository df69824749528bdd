//! Properties-file source
//!
//! A flat `name=level` file. Unlike the rule DSL there is no shorthand
//! expansion: every key is a full logger name or one of the reserved keys.

use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::layer::ConfigLayer;

/// Default properties file name
pub const PROPERTIES_FILE: &str = "conlog.properties";

/// Parse properties text into a configuration layer.
///
/// `#` and `!` start comments; the key ends at the first `=` or `:`.
pub fn parse_properties(text: &str) -> ConfigLayer {
    let mut layer = ConfigLayer::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let (key, value) = match line.find(['=', ':']) {
            Some(pos) => (line[..pos].trim(), line[pos + 1..].trim()),
            None => (line, ""),
        };
        if key.is_empty() {
            tracing::debug!("Skipping properties line without key: {line}");
            continue;
        }
        layer.set(key, value);
    }
    layer
}

/// Read a properties file; a missing file is not an error
pub fn read_properties(path: &Path) -> ConfigResult<Option<ConfigLayer>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(parse_properties(&text))),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ConfigError::io(path, err)),
    }
}
