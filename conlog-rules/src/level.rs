//! 日志级别词汇表
//!
//! 固定的有序级别集合，以及它与规范小写单词、单字母缩写之间的映射。

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 日志级别
///
/// `Off` 只用于解析结果：它让某个名称静默，但不存在"以 Off 级别输出"的调用。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// 最详细的跟踪信息
    Trace = 0,
    /// 调试信息
    Debug = 1,
    /// 一般信息
    Info = 2,
    /// 警告
    Warn = 3,
    /// 错误
    Error = 4,
    /// 关闭
    Off = 5,
}

impl Level {
    /// 全部级别，按严重程度升序
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Off,
    ];

    /// 将级别转换为大写名称
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    /// 规范小写单词（规则文本中使用的形式）
    pub const fn word(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        }
    }

    /// 单字母缩写
    pub const fn abbreviation(&self) -> char {
        match self {
            Level::Trace => 't',
            Level::Debug => 'd',
            Level::Info => 'i',
            Level::Warn => 'w',
            Level::Error => 'e',
            Level::Off => 'o',
        }
    }

    /// 控制台输出中的级别标记，`Off` 没有标记
    pub const fn marker(&self) -> Option<char> {
        match self {
            Level::Trace => Some('t'),
            Level::Debug => Some('d'),
            Level::Info => Some('i'),
            Level::Warn => Some('W'),
            Level::Error => Some('E'),
            Level::Off => None,
        }
    }

    /// 是否存在对应的输出调用
    pub const fn is_emitting(&self) -> bool {
        !matches!(self, Level::Off)
    }

    /// 从缩写字母解析（大小写不敏感）
    pub const fn from_abbreviation(c: char) -> Option<Self> {
        match c {
            't' | 'T' => Some(Level::Trace),
            'd' | 'D' => Some(Level::Debug),
            'i' | 'I' => Some(Level::Info),
            'w' | 'W' => Some(Level::Warn),
            'e' | 'E' => Some(Level::Error),
            'o' | 'O' => Some(Level::Off),
            _ => None,
        }
    }

    /// 从完整单词解析（大小写不敏感），无法识别时返回 `None`
    pub fn parse_word(word: &str) -> Option<Self> {
        Level::ALL
            .into_iter()
            .find(|level| level.word().eq_ignore_ascii_case(word))
    }

    /// 从完整单词解析，无法识别的输入默认为 `Info`
    pub fn from_word(word: &str) -> Self {
        Self::parse_word(word).unwrap_or(Level::Info)
    }

    /// 从u8解析级别
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            5 => Some(Level::Off),
            _ => None,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.word())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let word = String::deserialize(deserializer)?;
        Ok(Level::from_word(&word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(Level::from_u8(0), Some(Level::Trace));
        assert_eq!(Level::from_u8(5), Some(Level::Off));
        assert_eq!(Level::from_u8(6), None);
    }

    #[test]
    fn test_abbreviation_table() {
        for level in Level::ALL {
            assert_eq!(Level::from_abbreviation(level.abbreviation()), Some(level));
            let upper = level.abbreviation().to_ascii_uppercase();
            assert_eq!(Level::from_abbreviation(upper), Some(level));
        }
        assert_eq!(Level::from_abbreviation('x'), None);
        assert_eq!(Level::from_abbreviation(' '), None);
    }

    #[test]
    fn test_word_parsing() {
        assert_eq!(Level::parse_word("DEBUG"), Some(Level::Debug));
        assert_eq!(Level::parse_word("Off"), Some(Level::Off));
        assert_eq!(Level::parse_word("verbose"), None);
        // 无法识别的单词默认为 Info
        assert_eq!(Level::from_word("verbose"), Level::Info);
        assert_eq!(Level::from_word(""), Level::Info);
    }

    #[test]
    fn test_off_has_no_marker() {
        assert!(!Level::Off.is_emitting());
        assert_eq!(Level::Off.marker(), None);
        assert_eq!(Level::Warn.marker(), Some('W'));
        assert_eq!(Level::Trace.marker(), Some('t'));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Level::Warn), "WARN");
        assert_eq!(Level::Warn.word(), "warn");
    }

    #[test]
    fn test_serde_uses_words() {
        let json = serde_json::to_string(&Level::Error).unwrap();
        assert_eq!(json, "\"error\"");
        let level: Level = serde_json::from_str("\"TRACE\"").unwrap();
        assert_eq!(level, Level::Trace);
        let fallback: Level = serde_json::from_str("\"loud\"").unwrap();
        assert_eq!(fallback, Level::Info);
    }
}
