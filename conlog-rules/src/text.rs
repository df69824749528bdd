//! 可编辑的规则文本
//!
//! 编辑界面、存储后端与展开器之间传递的单元。内部始终保存规范文本。

use crate::expand::expand;
use crate::line::CanonicalLine;
use crate::normalize::normalize;
use crate::pretty::pretty;
use crate::rules::RuleMap;

/// 规范化后的规则文本
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleText {
    canonical: String,
}

impl RuleText {
    /// 来自用户输入：先规范化
    pub fn from_user(raw: &str) -> Self {
        Self {
            canonical: normalize(raw),
        }
    }

    /// 来自存储：存储中的文本已经是规范形式，原样采用
    pub fn from_canonical(stored: impl Into<String>) -> Self {
        Self {
            canonical: stored.into(),
        }
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn into_canonical(self) -> String {
        self.canonical
    }

    /// 展示给编辑界面的美化文本
    pub fn formatted(&self) -> String {
        pretty(&self.canonical)
    }

    /// 展开为规则表
    pub fn rules(&self) -> RuleMap {
        expand(&self.canonical)
    }

    /// 逐行解析
    pub fn lines(&self) -> impl Iterator<Item = CanonicalLine<'_>> {
        self.canonical.lines().map(CanonicalLine::parse)
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.trim().is_empty()
    }
}
