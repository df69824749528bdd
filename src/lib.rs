//! Conlog - 控制台日志器规则
//!
//! 用一份简洁的规则文本为具名日志器指定级别，并把日志输出成便于扫读的定宽列。
//!
//! # Architecture
//!
//! ```text
//! conlog-rules/   - 规则 DSL：规范化、展开、美化、级别解析（纯逻辑，无 IO）
//! conlog-config/  - 配置来源：profile 存储、properties 文件、环境变量
//! conlog-log/     - 日志器：创建时解析级别，名称缩写列，输出目标
//! conlog-cli/     - 命令行工具
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use conlog::{info, init};
//!
//! let factory = init(None);
//! let logger = factory.logger("com.mypackage.AppView");
//! info!(logger, "started in {} ms", 42);
//! ```

pub use conlog_config as config;
pub use conlog_log as log;
pub use conlog_rules as rules;

// 重导出常用类型
pub use conlog_config::{ConfigLoader, ConsoleConfig, EnvSource, ProfileStore, PROPERTIES_FILE};
pub use conlog_log::{LogConfig, Logger, LoggerFactory};
pub use conlog_rules::{expand, normalize, pretty, Level, RuleMap, RuleText};

// 日志宏
pub use conlog_log::{debug, error, info, log_error, trace, warn};

/// 按默认来源加载配置：可选的 profile 存储、当前目录的 `conlog.properties`、
/// `CONLOG_*` 环境变量
pub fn load_config(store: Option<&dyn ProfileStore>) -> ConsoleConfig {
    let mut loader = ConfigLoader::new()
        .with_properties_file(PROPERTIES_FILE)
        .with_env(EnvSource::from_process());
    if let Some(store) = store {
        loader = loader.with_store(store);
    }
    loader.load()
}

/// 初始化输出到控制台的日志工厂
///
/// # Example
/// ```ignore
/// let factory = conlog::init(None);
/// conlog::warn!(factory.logger("com.app.Db"), "slow query");
/// ```
pub fn init(store: Option<&dyn ProfileStore>) -> LoggerFactory {
    conlog_log::console_factory(&load_config(store))
}
