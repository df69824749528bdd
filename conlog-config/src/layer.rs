//! Configuration layers
//!
//! Every source (stored profile, properties file, environment) produces one
//! [`ConfigLayer`]. Layers are applied in order and later layers win per key.

use conlog_rules::{Level, RuleMap};

use crate::settings::{parse_default_level, DisplaySettings};

/// Reserved key enabling timestamps
pub const KEY_TIME: &str = "time";
/// Reserved key setting the logger-name column width
pub const KEY_WIDTH: &str = "width";
/// Reserved key setting the process default level
pub const KEY_DEFAULT: &str = "default";

/// Values contributed by a single configuration source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    /// Logger rules from this source
    pub rules: RuleMap,
    /// Whether this source asks for timestamps
    pub include_time: bool,
    /// Raw column width, validated when the layer is applied
    pub column_width: Option<String>,
    /// Raw default level word, validated when the layer is applied
    pub default_level: Option<String>,
}

impl ConfigLayer {
    /// Route a `key = value` pair either to a reserved setting or to the rules
    pub fn set(&mut self, key: &str, value: &str) {
        match key {
            KEY_TIME => self.include_time = is_truthy(value),
            KEY_WIDTH => self.column_width = Some(value.to_string()),
            KEY_DEFAULT => self.default_level = Some(value.to_string()),
            name => {
                self.rules.insert(name, Level::from_word(value));
            }
        }
    }

    /// Apply this layer on top of already merged values
    pub fn apply_to(
        self,
        settings: &mut DisplaySettings,
        default_level: &mut Level,
        rules: &mut RuleMap,
    ) {
        // Timestamps stay on once any layer enables them
        settings.include_time |= self.include_time;
        if let Some(width) = self.column_width {
            settings.apply_width(&width);
        }
        if let Some(level) = self.default_level.as_deref().and_then(parse_default_level) {
            *default_level = level;
        }
        rules.merge(self.rules);
    }
}

/// The mere presence of the time key enables timestamps unless it is explicitly negative
pub(crate) fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys() {
        let mut layer = ConfigLayer::default();
        layer.set("time", "");
        layer.set("width", "15");
        layer.set("default", "warn");
        layer.set("com.a.B", "debug");

        assert!(layer.include_time);
        assert_eq!(layer.column_width.as_deref(), Some("15"));
        assert_eq!(layer.default_level.as_deref(), Some("warn"));
        assert_eq!(layer.rules.len(), 1);
        assert_eq!(layer.rules.get("com.a.B"), Some(Level::Debug));
    }

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy(""));
        assert!(is_truthy("true"));
        assert!(is_truthy("1"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy(" NO "));
    }

    #[test]
    fn test_unknown_rule_word_defaults_to_info() {
        let mut layer = ConfigLayer::default();
        layer.set("com.a", "chatty");
        assert_eq!(layer.rules.get("com.a"), Some(Level::Info));
    }

    #[test]
    fn test_apply_to() {
        let mut settings = DisplaySettings {
            include_time: true,
            column_width: 10,
        };
        let mut default_level = Level::Info;
        let mut rules = RuleMap::new();
        rules.insert("a", Level::Trace);

        let mut layer = ConfigLayer::default();
        layer.set("width", "nope");
        layer.set("default", "error");
        layer.set("a", "off");
        layer.apply_to(&mut settings, &mut default_level, &mut rules);

        assert!(settings.include_time);
        assert_eq!(settings.column_width, 10);
        assert_eq!(default_level, Level::Error);
        assert_eq!(rules.get("a"), Some(Level::Off));
    }
}
