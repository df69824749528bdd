//! 规范行模型
//!
//! 规范文本的每一行都属于以下四种之一：注释、空行、条目、畸形行。

use crate::level::Level;

/// 名称与级别之间的分隔符
pub const SEPARATOR: char = ':';

/// 注释前缀
pub const COMMENT_PREFIX: char = '#';

/// 规范文本中的一行
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanonicalLine<'a> {
    /// 注释行，原样保留
    Comment(&'a str),
    /// 空行（或只有空白）
    Blank,
    /// 条目：名称 + 可选级别（缺省表示继承）
    Entry {
        name: &'a str,
        level: Option<Level>,
    },
    /// 畸形行（多个分隔符、没有名称等），原样保留，不产生规则
    Malformed(&'a str),
}

impl<'a> CanonicalLine<'a> {
    /// 解析一行规范文本
    pub fn parse(line: &'a str) -> Self {
        if line.starts_with(COMMENT_PREFIX) {
            return CanonicalLine::Comment(line);
        }
        if line.trim().is_empty() {
            return CanonicalLine::Blank;
        }

        let fields = split_fields(line);
        let (name, level) = match fields.as_slice() {
            [name] => (name.trim(), None),
            [name, level] => {
                let level = level.trim();
                (
                    name.trim(),
                    (!level.is_empty()).then(|| Level::from_word(level)),
                )
            }
            _ => return CanonicalLine::Malformed(line),
        };

        if name.is_empty() {
            return CanonicalLine::Malformed(line);
        }
        CanonicalLine::Entry { name, level }
    }

    /// 是否是条目行
    pub fn is_entry(&self) -> bool {
        matches!(self, CanonicalLine::Entry { .. })
    }
}

/// 名称是否是完整限定名（含 `.`）
pub fn is_qualified(name: &str) -> bool {
    name.contains('.')
}

/// 名称是否是包上下文标记（以 `.` 结尾）
pub fn is_package_marker(name: &str) -> bool {
    name.ends_with('.')
}

/// 按分隔符拆分一行，并丢弃末尾的空字段
///
/// 没有分隔符时整行作为唯一字段（即使为空）；`name:` 只剩一个字段，
/// 单独的 `:` 一个字段也不剩。
pub fn split_fields(line: &str) -> Vec<&str> {
    if !line.contains(SEPARATOR) {
        return vec![line];
    }
    let mut fields: Vec<&str> = line.split(SEPARATOR).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}
