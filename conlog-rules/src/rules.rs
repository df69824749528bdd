//! 规则表与级别解析

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::level::Level;

/// 完整限定名 → 级别
///
/// 键唯一，后写入的覆盖先写入的。有序存储使导出结果稳定。
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleMap {
    entries: BTreeMap<String, Level>,
}

impl RuleMap {
    /// 创建空规则表
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, level: Level) -> Option<Level> {
        self.entries.insert(name.into(), level)
    }

    pub fn get(&self, name: &str) -> Option<Level> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Level)> {
        self.entries.iter().map(|(name, level)| (name.as_str(), *level))
    }

    /// 合并另一张规则表，同名键以 `other` 为准
    pub fn merge(&mut self, other: RuleMap) {
        self.entries.extend(other.entries);
    }

    /// 导出为带固定前缀的属性表（值为规范小写单词）
    pub fn to_properties(&self, prefix: &str) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(name, level)| (format!("{prefix}{name}"), level.word().to_string()))
            .collect()
    }

    /// 解析名称的有效级别
    ///
    /// 从完整名称开始查找，找不到就去掉最后一段再查，一直到只剩最顶层一段；
    /// 全部落空时返回 `default`。
    ///
    /// ```
    /// use conlog_rules::{Level, RuleMap};
    ///
    /// let mut rules = RuleMap::new();
    /// rules.insert("a.b", Level::Warn);
    /// rules.insert("a.b.c", Level::Debug);
    ///
    /// assert_eq!(rules.resolve("a.b.c.D", Level::Info), Level::Debug);
    /// assert_eq!(rules.resolve("a.b.x", Level::Info), Level::Warn);
    /// assert_eq!(rules.resolve("a.z", Level::Error), Level::Error);
    /// ```
    pub fn resolve(&self, name: &str, default: Level) -> Level {
        let mut candidate = name;
        loop {
            if let Some(level) = self.get(candidate) {
                return level;
            }
            match candidate.rfind('.') {
                Some(last_dot) => candidate = &candidate[..last_dot],
                None => return default,
            }
        }
    }
}

impl FromIterator<(String, Level)> for RuleMap {
    fn from_iter<I: IntoIterator<Item = (String, Level)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RuleMap {
    type Item = (String, Level);
    type IntoIter = btree_map::IntoIter<String, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// 可原子替换的规则表快照
///
/// 重新加载配置时在旁边构建新表，然后一次性发布；读者要么看到旧表，
/// 要么看到新表，不会看到构建到一半的表。
pub struct SharedRules {
    current: ArcSwap<RuleMap>,
}

impl SharedRules {
    pub fn new(rules: RuleMap) -> Self {
        Self {
            current: ArcSwap::from_pointee(rules),
        }
    }

    /// 当前快照
    pub fn snapshot(&self) -> Arc<RuleMap> {
        self.current.load_full()
    }

    /// 发布新规则表，返回被替换的旧快照
    pub fn publish(&self, rules: RuleMap) -> Arc<RuleMap> {
        self.current.swap(Arc::new(rules))
    }

    /// 在当前快照上解析
    pub fn resolve(&self, name: &str, default: Level) -> Level {
        self.current.load().resolve(name, default)
    }
}

impl fmt::Debug for SharedRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRules")
            .field("current", &*self.current.load())
            .finish()
    }
}

impl Default for SharedRules {
    fn default() -> Self {
        Self::new(RuleMap::new())
    }
}
