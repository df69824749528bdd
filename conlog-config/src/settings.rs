//! Display settings consumed by the print path

use conlog_rules::Level;

use crate::error::{ConfigError, ConfigResult};

/// Default width of the logger-name column
pub const DEFAULT_COLUMN_WIDTH: usize = 10;

/// Largest accepted column width
pub const MAX_COLUMN_WIDTH: usize = 99;

/// Options that shape a printed log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Prefix every line with a `HH:MM:SS.mmm` timestamp
    pub include_time: bool,
    /// Visible characters reserved for the shortened logger name
    pub column_width: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            include_time: false,
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl DisplaySettings {
    /// Apply a textual width, keeping the current width when the value is invalid.
    ///
    /// The failure is reported as a diagnostic and never aborts loading.
    pub fn apply_width(&mut self, raw: &str) {
        match parse_column_width(raw) {
            Ok(width) => self.column_width = width,
            Err(err) => tracing::warn!("{err}. Using width {} instead.", self.column_width),
        }
    }
}

/// Parse a column width in `0..=MAX_COLUMN_WIDTH`
pub fn parse_column_width(raw: &str) -> ConfigResult<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|width| *width <= MAX_COLUMN_WIDTH)
        .ok_or_else(|| ConfigError::InvalidWidth(raw.to_string()))
}

/// Parse the process default level; unknown words are reported and ignored
pub fn parse_default_level(raw: &str) -> Option<Level> {
    let level = Level::parse_word(raw.trim());
    if level.is_none() {
        tracing::warn!("Default level ({raw}) is not a known level. Keeping previous default.");
    }
    level
}
