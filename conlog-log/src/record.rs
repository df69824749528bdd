//! 日志记录定义

use std::sync::Arc;

use chrono::{DateTime, Local};
use conlog_rules::Level;

/// 单条日志记录
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// 本地时间
    pub timestamp: DateTime<Local>,
    /// 日志级别
    pub level: Level,
    /// 日志器完整名称
    pub name: Arc<str>,
    /// 格式化后的消息
    pub message: String,
}

impl Record {
    /// 创建新记录，时间戳取当前本地时间
    pub fn new(level: Level, name: Arc<str>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            name,
            message: message.into(),
        }
    }

    /// 指定时间戳（测试和重放用）
    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// 格式化为本地墙钟时间 `HH:MM:SS.mmm`
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M:%S%.3f").to_string()
}
