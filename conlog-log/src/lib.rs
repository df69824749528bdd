//! conlog-log - 控制台日志器
//!
//! 按规则表为具名日志器确定级别，并把日志输出成便于扫读的定宽列：
//! - **创建时解析**：级别在 `factory.logger(name)` 时确定，之后不再变化
//! - **规则可热替换**：`reload` 原子发布新规则表，只影响之后创建的日志器
//! - **紧凑名称列**：只显示名称最后一段；同一日志器连续输出时用 `..` 占位
//! - **级别分流**：Warn/Error 写标准错误，其余写标准输出
//! - **错误链**：`log_error` 把错误及其 `source()` 链紧跟在日志行后输出
//!
//! # 快速开始
//!
//! ```ignore
//! use conlog_config::{ConfigLoader, EnvSource};
//! use conlog_log::{LogConfig, info};
//!
//! let config = ConfigLoader::new().with_env(EnvSource::from_process()).load();
//! let (factory, _) = LogConfig::from_console_config(&config).init();
//!
//! let logger = factory.logger("com.mypackage.AppView");
//! info!(logger, "应用启动成功");
//! ```
//!
//! 输出：
//!
//! ```text
//! AppView     i| 应用启动成功
//! ```

mod buffer;
mod config;
mod factory;
mod format;
mod logger;
mod macros;
mod record;
mod short_name;

pub use conlog_rules::Level;

pub use buffer::{BufferSink, BufferedLine};
pub use config::{LogConfig, OutputConfig};
pub use factory::LoggerFactory;
pub use format::{append_error_chain, LineFormat};
pub use logger::{ConsoleSink, FileSink, LogSink, Logger, Output, StderrSink, StdoutSink};
pub use record::{format_timestamp, Record};
pub use short_name::{NameColumn, ShortName, ShortNameState};

// 宏通过 #[macro_export] 自动导出到 crate 根：
// trace!, debug!, info!, warn!, error!, log!, log_error!

/// 日志结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// 日志系统错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 配置错误
    #[error(transparent)]
    Config(#[from] conlog_config::ConfigError),
}

/// 按配置快照直接创建输出到控制台的日志工厂
pub fn console_factory(config: &conlog_config::ConsoleConfig) -> LoggerFactory {
    let (factory, _) = LogConfig::from_console_config(config).init();
    factory
}

/// 打开文件输出，失败时返回错误（`LogConfig::with_file` 会静默跳过）
pub fn open_file_sink(path: impl AsRef<std::path::Path>) -> Result<FileSink> {
    Ok(FileSink::new(path)?)
}
