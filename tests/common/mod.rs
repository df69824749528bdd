//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

use std::sync::Arc;

use conlog::log::{BufferSink, ShortNameState};
use conlog::{LogConfig, LoggerFactory, RuleMap, RuleText};

/// 用户文本 → 规则表
pub fn rules_of(raw: &str) -> RuleMap {
    RuleText::from_user(raw).rules()
}

/// 创建输出到缓冲区的日志工厂（独立的缩写状态，不带时间）
pub fn buffered_factory(raw_rules: &str, width: usize) -> (LoggerFactory, Arc<BufferSink>) {
    let (factory, buffer) = LogConfig::default()
        .with_rule_text(raw_rules)
        .with_width(width)
        .with_state(ShortNameState::new())
        .with_buffer(1000)
        .init();
    (factory, buffer.expect("buffer output configured"))
}

/// 规则表转成 (名称, 级别单词) 列表，便于断言
pub fn entries(rules: &RuleMap) -> Vec<(String, String)> {
    rules
        .iter()
        .map(|(name, level)| (name.to_string(), level.word().to_string()))
        .collect()
}
