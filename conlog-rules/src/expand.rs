//! 层级展开
//!
//! 按声明顺序遍历规范行，维护继承上下文，把短名称展开成完整限定名，
//! 最终得到一张扁平的 名称 → 级别 规则表。

use crate::level::Level;
use crate::line::{is_package_marker, is_qualified, CanonicalLine};
use crate::rules::RuleMap;

/// 继承上下文
///
/// 只有原始名称带 `.` 的行会更新上下文；短名称行只读取它。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InheritanceContext {
    prior_full_name: String,
    prior_level: Level,
}

impl Default for InheritanceContext {
    fn default() -> Self {
        Self {
            prior_full_name: String::new(),
            prior_level: Level::Info,
        }
    }
}

impl InheritanceContext {
    /// 最近一个完整限定名（或包上下文标记）
    pub fn prior_full_name(&self) -> &str {
        &self.prior_full_name
    }

    /// 最近一个完整限定行的有效级别
    pub fn prior_level(&self) -> Level {
        self.prior_level
    }

    /// 处理一个条目，返回 (展开后的名称, 有效级别)
    pub fn apply(&mut self, name: &str, level: Option<Level>) -> (String, Level) {
        let level = level.unwrap_or(self.prior_level);
        if is_qualified(name) {
            self.prior_full_name = name.to_string();
            self.prior_level = level;
            (name.to_string(), level)
        } else {
            (self.qualify(name), level)
        }
    }

    /// 把短名称放到当前上下文中
    ///
    /// 上一个名称的最后一段以大写字母开头时视为类名，短名称成为它的兄弟；
    /// 否则视为包名，短名称成为它的子项。
    pub fn qualify(&self, short: &str) -> String {
        let prior = self.prior_full_name.as_str();
        let Some(last_dot) = prior.rfind('.') else {
            return short.to_string();
        };

        if last_dot + 1 == prior.len() {
            return format!("{prior}{short}");
        }

        let segment_is_class = prior[last_dot + 1..]
            .chars()
            .next()
            .is_some_and(char::is_uppercase);
        if segment_is_class {
            format!("{}.{short}", &prior[..last_dot])
        } else {
            format!("{prior}.{short}")
        }
    }
}

/// 把规范文本展开为规则表
///
/// 同一个完整限定名出现多次时，后出现的覆盖先出现的；以 `.` 结尾的名称
/// 只设置上下文，不产生规则。
///
/// ```
/// use conlog_rules::{expand, Level};
///
/// let rules = expand("com.mypackage.:trace\nMyClass\nMyOtherClass:error\n");
/// assert_eq!(rules.get("com.mypackage.MyClass"), Some(Level::Trace));
/// assert_eq!(rules.get("com.mypackage.MyOtherClass"), Some(Level::Error));
/// assert_eq!(rules.get("com.mypackage"), None);
/// ```
pub fn expand(canonical: &str) -> RuleMap {
    let mut context = InheritanceContext::default();
    let mut rules = RuleMap::new();

    for line in canonical.lines() {
        let CanonicalLine::Entry { name, level } = CanonicalLine::parse(line) else {
            continue;
        };
        let (full_name, level) = context.apply(name, level);
        if !is_package_marker(&full_name) {
            rules.insert(full_name, level);
        }
    }

    rules
}
