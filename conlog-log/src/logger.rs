//! 日志器实现

use std::error::Error;
use std::io::Write;
use std::sync::{Arc, Mutex};

use conlog_rules::Level;

use crate::format::{append_error_chain, LineFormat};
use crate::record::Record;
use crate::short_name::ShortName;

/// 日志输出目标trait
pub trait LogSink: Send + Sync {
    /// 写入一条记录及其格式化后的行
    fn write(&self, record: &Record, line: &str);
}

/// 控制台输出：Warn/Error 写标准错误，其余写标准输出
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, record: &Record, line: &str) {
        if record.level >= Level::Warn {
            StderrSink.write(record, line);
        } else {
            StdoutSink.write(record, line);
        }
    }
}

/// 标准输出sink
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write(&self, _: &Record, line: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

/// 标准错误sink
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, _: &Record, line: &str) {
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "{line}");
    }
}

/// 文件sink
pub struct FileSink {
    file: Mutex<std::fs::File>,
}

impl FileSink {
    /// 创建文件sink（追加模式）
    pub fn new(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(FileSink {
            file: Mutex::new(file),
        })
    }
}

impl LogSink for FileSink {
    fn write(&self, _: &Record, line: &str) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
        }
    }
}

/// 同一工厂创建的日志器共享的输出：行格式 + 输出目标
pub struct Output {
    format: LineFormat,
    sinks: Vec<Box<dyn LogSink>>,
}

impl Output {
    pub fn new(format: LineFormat) -> Self {
        Self {
            format,
            sinks: Vec::new(),
        }
    }

    /// 添加输出目标
    pub fn with_sink<S: LogSink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn add_sink<S: LogSink + 'static>(&mut self, sink: S) {
        self.sinks.push(Box::new(sink));
    }

    pub fn format(&self) -> &LineFormat {
        &self.format
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    fn emit(&self, record: &Record, short: &ShortName, error: Option<&dyn Error>) {
        let mut line = self.format.format(record, short);
        if let Some(error) = error {
            append_error_chain(&mut line, error);
        }
        for sink in &self.sinks {
            sink.write(record, &line);
        }
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("format", &self.format)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

/// 具名日志器
///
/// 级别在创建时确定，之后规则表的变化不会影响已创建的日志器。
#[derive(Clone, Debug)]
pub struct Logger {
    name: Arc<str>,
    level: Level,
    short: ShortName,
    output: Arc<Output>,
}

impl Logger {
    /// 创建日志器；通常由 [`LoggerFactory`](crate::LoggerFactory) 调用
    pub fn new(name: &str, level: Level, output: Arc<Output>) -> Self {
        let short = output.format().column().shorten(name);
        Logger {
            name: Arc::from(name),
            level,
            short,
            output,
        }
    }

    /// 不输出任何内容的日志器（测试或禁用场景）
    pub fn noop(name: &str) -> Self {
        Self::new(name, Level::Off, Arc::new(Output::new(LineFormat::default())))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 创建时确定的级别
    pub fn level(&self) -> Level {
        self.level
    }

    /// 名称缩写
    pub fn short_name(&self) -> &ShortName {
        &self.short
    }

    /// 检查指定级别是否启用
    pub fn is_enabled(&self, level: Level) -> bool {
        level.is_emitting() && level >= self.level
    }

    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Level::Trace)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Level::Debug)
    }

    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(Level::Info)
    }

    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(Level::Warn)
    }

    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(Level::Error)
    }

    /// 记录日志
    pub fn log(&self, level: Level, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }
        let record = Record::new(level, Arc::clone(&self.name), message);
        self.output.emit(&record, &self.short, None);
    }

    /// 记录日志并附带错误链
    ///
    /// 错误本身和每一层 `source()` 紧跟在日志行后面，写到同一个输出目标。
    pub fn log_error(&self, level: Level, message: impl Into<String>, error: &dyn Error) {
        if !self.is_enabled(level) {
            return;
        }
        let record = Record::new(level, Arc::clone(&self.name), message);
        self.output.emit(&record, &self.short, Some(error));
    }
}
