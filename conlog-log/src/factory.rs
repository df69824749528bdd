//! 日志器工厂
//!
//! 工厂持有当前规则表快照、默认级别和共享输出。`logger(name)` 在创建时解析
//! 一次级别；`reload` 发布新的规则表，只影响之后创建的日志器。

use std::sync::Arc;

use conlog_rules::{Level, RuleMap, SharedRules};

use crate::logger::{Logger, Output};

#[derive(Clone, Debug)]
pub struct LoggerFactory {
    rules: Arc<SharedRules>,
    default_level: Level,
    output: Arc<Output>,
}

impl LoggerFactory {
    pub fn new(rules: RuleMap, default_level: Level, output: Output) -> Self {
        Self {
            rules: Arc::new(SharedRules::new(rules)),
            default_level,
            output: Arc::new(output),
        }
    }

    /// 创建日志器，按当前规则表解析级别
    pub fn logger(&self, name: &str) -> Logger {
        let level = self.rules.resolve(name, self.default_level);
        tracing::trace!(name, %level, "Resolved logger level");
        Logger::new(name, level, Arc::clone(&self.output))
    }

    /// 发布新的规则表
    pub fn reload(&self, rules: RuleMap) {
        let count = rules.len();
        self.rules.publish(rules);
        tracing::debug!(rules = count, "Published new logger rules");
    }

    /// 当前规则表快照
    pub fn rules(&self) -> Arc<RuleMap> {
        self.rules.snapshot()
    }

    pub fn default_level(&self) -> Level {
        self.default_level
    }

    pub fn output(&self) -> &Output {
        &self.output
    }
}
