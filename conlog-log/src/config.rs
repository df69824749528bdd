//! 日志配置
//!
//! 提供便捷的日志初始化配置。

use std::path::PathBuf;
use std::sync::Arc;

use conlog_config::{ConsoleConfig, DEFAULT_COLUMN_WIDTH};
use conlog_rules::{Level, RuleMap, RuleText};

use crate::buffer::BufferSink;
use crate::factory::LoggerFactory;
use crate::format::LineFormat;
use crate::logger::{ConsoleSink, FileSink, Output, StderrSink, StdoutSink};
use crate::short_name::ShortNameState;

/// 日志输出目标配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputConfig {
    /// 按级别分流到标准输出/标准错误
    Console,
    /// 输出到标准输出
    Stdout,
    /// 输出到标准错误
    Stderr,
    /// 输出到文件（路径）
    File(PathBuf),
    /// 输出到内存缓冲区（容量）
    Buffer(usize),
}

/// 日志配置
///
/// 用于一键初始化日志工厂
///
/// # 示例
///
/// ```
/// use conlog_log::{LogConfig, Level};
///
/// let (factory, buffer) = LogConfig::new(Level::Info)
///     .with_rule_text("com.mypackage.:debug\nMyClass:trace")
///     .with_buffer(100)
///     .init();
///
/// let logger = factory.logger("com.mypackage.MyClass");
/// assert_eq!(logger.level(), Level::Trace);
/// conlog_log::trace!(logger, "hello {}", 42);
/// assert_eq!(buffer.unwrap().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// 没有规则匹配时的级别
    pub default_level: Level,
    /// 规则表
    pub rules: RuleMap,
    /// 行首输出时间
    pub include_time: bool,
    /// 名称列宽度
    pub column_width: usize,
    /// 输出目标列表
    pub outputs: Vec<OutputConfig>,
    /// 缩写状态；默认使用进程级共享状态
    pub state: ShortNameState,
}

impl LogConfig {
    /// 创建默认配置（无规则，无输出）
    pub fn new(default_level: Level) -> Self {
        LogConfig {
            default_level,
            rules: RuleMap::new(),
            include_time: false,
            column_width: DEFAULT_COLUMN_WIDTH,
            outputs: Vec::new(),
            state: ShortNameState::global(),
        }
    }

    /// 按加载好的配置快照创建，输出到控制台
    pub fn from_console_config(config: &ConsoleConfig) -> Self {
        LogConfig {
            rules: config.rules.clone(),
            include_time: config.settings.include_time,
            column_width: config.settings.column_width,
            ..Self::new(config.default_level)
        }
        .with_console()
    }

    /// 合并规则表（后加入的覆盖同名规则）
    pub fn with_rules(mut self, rules: RuleMap) -> Self {
        self.rules.merge(rules);
        self
    }

    /// 合并用户编写的规则文本
    pub fn with_rule_text(self, raw: &str) -> Self {
        let rules = RuleText::from_user(raw).rules();
        self.with_rules(rules)
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.column_width = width;
        self
    }

    pub fn with_time(mut self, include_time: bool) -> Self {
        self.include_time = include_time;
        self
    }

    /// 使用独立的缩写状态（测试用）
    pub fn with_state(mut self, state: ShortNameState) -> Self {
        self.state = state;
        self
    }

    /// 添加控制台输出
    pub fn with_console(self) -> Self {
        self.with_unique_output(OutputConfig::Console)
    }

    /// 添加 stdout 输出
    pub fn with_stdout(self) -> Self {
        self.with_unique_output(OutputConfig::Stdout)
    }

    /// 添加 stderr 输出
    pub fn with_stderr(self) -> Self {
        self.with_unique_output(OutputConfig::Stderr)
    }

    /// 添加文件输出
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    /// 添加内存缓冲输出
    pub fn with_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::Buffer(capacity));
        self
    }

    fn with_unique_output(mut self, output: OutputConfig) -> Self {
        if !self.outputs.contains(&output) {
            self.outputs.push(output);
        }
        self
    }

    /// 初始化日志工厂
    ///
    /// 返回 (factory, Option<buffer>)；配置了多个缓冲区时返回最后一个
    pub fn init(self) -> (LoggerFactory, Option<Arc<BufferSink>>) {
        let format = LineFormat::new(self.include_time, self.column_width, self.state);
        let mut output = Output::new(format);
        let mut buffer: Option<Arc<BufferSink>> = None;

        for target in self.outputs {
            match target {
                OutputConfig::Console => output.add_sink(ConsoleSink),
                OutputConfig::Stdout => output.add_sink(StdoutSink),
                OutputConfig::Stderr => output.add_sink(StderrSink),
                OutputConfig::File(path) => match FileSink::new(&path) {
                    Ok(sink) => output.add_sink(sink),
                    Err(err) => {
                        tracing::warn!("Skipping log file {}: {err}", path.display())
                    }
                },
                OutputConfig::Buffer(capacity) => {
                    let sink = BufferSink::new(capacity);
                    buffer = Some(Arc::clone(&sink));
                    output.add_sink(sink);
                }
            }
        }

        tracing::debug!(
            rules = self.rules.len(),
            sinks = output.sink_count(),
            "Initialized logger factory"
        );
        (
            LoggerFactory::new(self.rules, self.default_level, output),
            buffer,
        )
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(Level::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conlog_config::DisplaySettings;

    #[test]
    fn test_config_new() {
        let config = LogConfig::new(Level::Debug);
        assert_eq!(config.default_level, Level::Debug);
        assert!(config.outputs.is_empty());
        assert!(config.rules.is_empty());
        assert_eq!(config.column_width, 10);
        assert!(!config.include_time);
    }

    #[test]
    fn test_unique_outputs() {
        let config = LogConfig::default()
            .with_console()
            .with_console()
            .with_stdout()
            .with_stdout()
            .with_stderr();
        assert_eq!(
            config.outputs,
            vec![OutputConfig::Console, OutputConfig::Stdout, OutputConfig::Stderr]
        );

        let config = LogConfig::default().with_buffer(10).with_buffer(20);
        assert_eq!(config.outputs.len(), 2);
    }

    #[test]
    fn test_rule_text_merges() {
        let config = LogConfig::default()
            .with_rule_text("a.:debug\nB\nc.D:w")
            .with_rule_text("a.B:error");
        assert_eq!(config.rules.get("a.B"), Some(Level::Error));
        assert_eq!(config.rules.get("c.D"), Some(Level::Warn));
    }

    #[test]
    fn test_from_console_config() {
        let mut rules = RuleMap::new();
        rules.insert("x.Y", Level::Trace);
        let console = ConsoleConfig {
            settings: DisplaySettings {
                include_time: true,
                column_width: 5,
            },
            default_level: Level::Warn,
            rules,
        };
        let config = LogConfig::from_console_config(&console);
        assert_eq!(config.default_level, Level::Warn);
        assert_eq!(config.column_width, 5);
        assert!(config.include_time);
        assert_eq!(config.outputs, vec![OutputConfig::Console]);
        assert_eq!(config.rules.get("x.Y"), Some(Level::Trace));
    }

    #[test]
    fn test_init_with_buffer() {
        let (factory, buffer) = LogConfig::new(Level::Info)
            .with_rule_text("com.app:t")
            .with_width(4)
            .with_state(ShortNameState::new())
            .with_buffer(10)
            .init();
        let buffer = buffer.unwrap();

        let logger = factory.logger("com.app.Worker");
        crate::debug!(logger, "job {}", 7);
        crate::debug!(logger, "job {}", 8);
        crate::debug!(factory.logger("org.Other"), "hidden");

        assert_eq!(buffer.lines(), vec!["Work  d| job 7", "..    d| job 8"]);
    }

    #[test]
    fn test_init_no_buffer() {
        let (factory, buffer) = LogConfig::new(Level::Debug).init();
        assert!(buffer.is_none());
        assert_eq!(factory.output().sink_count(), 0);
        // 无 sink 的日志器也能正常工作
        crate::debug!(factory.logger("a"), "no sink");
    }

    #[test]
    fn test_init_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        let (factory, _) = LogConfig::new(Level::Info)
            .with_state(ShortNameState::new())
            .with_width(3)
            .with_file(&path)
            .with_file(dir.path().join("missing").join("skipped.log"))
            .init();
        assert_eq!(factory.output().sink_count(), 1);

        crate::error!(factory.logger("p.Query"), "failed");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Que  E| failed\n");
    }
}
