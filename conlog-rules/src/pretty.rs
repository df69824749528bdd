//! 规则文本美化
//!
//! 纯展示用途：短名称行缩进三个空格，级别分隔符两侧各加一个空格。
//! 注释、空行和畸形行原样输出。

use crate::line::{is_qualified, CanonicalLine};

/// 短名称行的缩进
pub const SHORT_NAME_INDENT: &str = "   ";

/// 美化规范文本，行数不变
///
/// ```
/// use conlog_rules::pretty;
///
/// assert_eq!(
///     pretty("com.a.:trace\nMyClass\nOther:error\n"),
///     "com.a. : trace\n   MyClass\n   Other : error\n"
/// );
/// ```
pub fn pretty(canonical: &str) -> String {
    let mut out = String::with_capacity(canonical.len() * 2);
    for line in canonical.lines() {
        match CanonicalLine::parse(line) {
            CanonicalLine::Entry { name, level } => {
                if !is_qualified(name) {
                    out.push_str(SHORT_NAME_INDENT);
                }
                out.push_str(name);
                if let Some(level) = level {
                    out.push_str(" : ");
                    out.push_str(level.word());
                }
            }
            CanonicalLine::Comment(_) | CanonicalLine::Blank | CanonicalLine::Malformed(_) => {
                out.push_str(line)
            }
        }
        out.push('\n');
    }
    out
}
