//! 输出行格式
//!
//! `[HH:MM:SS.mmm ]<名称列> <标记>| <消息>`

use std::error::Error;

use conlog_config::DisplaySettings;

use crate::record::{format_timestamp, Record};
use crate::short_name::{NameColumn, ShortName, ShortNameState};

/// 一行输出的格式
#[derive(Clone, Debug)]
pub struct LineFormat {
    include_time: bool,
    column: NameColumn,
    state: ShortNameState,
}

impl LineFormat {
    pub fn new(include_time: bool, width: usize, state: ShortNameState) -> Self {
        Self {
            include_time,
            column: NameColumn::new(width),
            state,
        }
    }

    /// 按显示配置创建，使用进程级缩写状态
    pub fn from_settings(settings: &DisplaySettings) -> Self {
        Self::new(
            settings.include_time,
            settings.column_width,
            ShortNameState::global(),
        )
    }

    pub fn include_time(&self) -> bool {
        self.include_time
    }

    pub fn column(&self) -> &NameColumn {
        &self.column
    }

    pub fn state(&self) -> &ShortNameState {
        &self.state
    }

    /// 格式化一条记录；同时更新"上一次输出"状态
    pub fn format(&self, record: &Record, short: &ShortName) -> String {
        let marker = record.level.marker().unwrap_or(' ');
        let token = self.column.render(short, &self.state);

        let mut line = String::with_capacity(token.len() + record.message.len() + 20);
        if self.include_time {
            line.push_str(&format_timestamp(&record.timestamp));
            line.push(' ');
        }
        line.push_str(token);
        line.push(' ');
        line.push(marker);
        line.push_str("| ");
        line.push_str(&record.message);
        line
    }
}

/// 错误附加行的缩进
pub const ERROR_INDENT: &str = "    ";

/// 在输出行后追加错误链：先是错误本身，再按 `source()` 每层一行 `caused by:`
pub fn append_error_chain(line: &mut String, error: &dyn Error) {
    line.push('\n');
    line.push_str(ERROR_INDENT);
    line.push_str(&error.to_string());

    let mut source = error.source();
    while let Some(cause) = source {
        line.push('\n');
        line.push_str(ERROR_INDENT);
        line.push_str("caused by: ");
        line.push_str(&cause.to_string());
        source = cause.source();
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::from_settings(&DisplaySettings::default())
    }
}
