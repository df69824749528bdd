//! 规则文本规范化
//!
//! 把用户随手输入的文本改写成规范行形式：
//! - 名称去掉首尾空白
//! - `=` 统一改为 `:`
//! - 级别缩写展开为规范单词（只看第一个字符）
//! - 注释行与空行原样保留，行数不变

use crate::level::Level;
use crate::line::{split_fields, COMMENT_PREFIX, SEPARATOR};

/// 规范化一段规则文本
///
/// 输出中每个输入行对应一行，并以换行符结尾。
///
/// # 示例
///
/// ```
/// use conlog_rules::normalize;
///
/// assert_eq!(normalize("com.mypackage.MyClass = D"), "com.mypackage.MyClass:debug\n");
/// assert_eq!(normalize("# keep me\n\nMyClass"), "# keep me\n\nMyClass\n");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 16);
    for line in raw.lines() {
        normalize_line(line, &mut out);
        out.push('\n');
    }
    out
}

fn normalize_line(line: &str, out: &mut String) {
    // 两个字符以内的行不做整理
    let line = if line.chars().count() > 2 {
        line.trim().replace('=', ":")
    } else {
        line.to_string()
    };

    if line.starts_with(COMMENT_PREFIX) {
        out.push_str(&line);
        return;
    }

    match split_fields(&line).as_slice() {
        [name] => out.push_str(name.trim()),
        [name, level] => {
            out.push_str(name.trim());
            if let Some(level) = expand_abbreviation(level) {
                out.push(SEPARATOR);
                out.push_str(level.word());
            }
        }
        _ => out.push_str(&line),
    }
}

/// 只看去掉空白后的第一个字符；无法识别时级别被移除（即继承）
fn expand_abbreviation(level: &str) -> Option<Level> {
    level.trim().chars().next().and_then(Level::from_abbreviation)
}
