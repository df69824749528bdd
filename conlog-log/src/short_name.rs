//! 日志器名称缩写
//!
//! 控制台输出只显示名称最后一段，截断/补齐到固定宽度；同一个日志器连续输出时
//! 用 `..` 占位代替名称。"上一次输出的是谁"记录在一个原子槽里，可以整个进程
//! 共享，也可以为测试单独创建。

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use conlog_config::MAX_COLUMN_WIDTH;
use once_cell::sync::Lazy;

/// 调试/跟踪升级后缀，显示时去掉
const ESCALATION_SUFFIXES: [&str; 2] = ["_T", "_D"];

static GLOBAL_STATE: Lazy<ShortNameState> = Lazy::new(ShortNameState::new);

/// 最近一次输出的日志器身份
///
/// 克隆共享同一个槽。并发输出交错时可能选错名称/占位，只影响外观。
#[derive(Clone, Debug, Default)]
pub struct ShortNameState {
    last: Arc<AtomicU64>,
}

impl ShortNameState {
    /// 创建独立的槽
    pub fn new() -> Self {
        Self::default()
    }

    /// 进程级共享槽
    pub fn global() -> Self {
        GLOBAL_STATE.clone()
    }

    /// 记录本次输出的身份，返回上一次的身份
    pub fn swap(&self, identity: u64) -> u64 {
        self.last.swap(identity, Ordering::AcqRel)
    }

    /// 本次输出是否与上一次来自同一个日志器
    pub fn is_continuation(&self, identity: u64) -> bool {
        self.swap(identity) == identity
    }

    /// 两个句柄是否指向同一个槽
    pub fn shares_slot_with(&self, other: &ShortNameState) -> bool {
        Arc::ptr_eq(&self.last, &other.last)
    }
}

/// 预先计算好的名称缩写
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortName {
    token: String,
    identity: u64,
}

impl ShortName {
    /// 定宽显示串（含末尾分隔空格）
    pub fn token(&self) -> &str {
        &self.token
    }

    /// 完整名称的身份散列（非零）
    pub fn identity(&self) -> u64 {
        self.identity
    }
}

/// 名称列的宽度与续行占位
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameColumn {
    width: usize,
    continuation: String,
}

impl NameColumn {
    /// 宽度超过 `MAX_COLUMN_WIDTH` 时按上限处理
    pub fn new(width: usize) -> Self {
        let width = width.min(MAX_COLUMN_WIDTH);
        let pad = padded_len(width);
        let continuation = if pad > 2 {
            format!("..{}", " ".repeat(pad - 2))
        } else {
            " ".repeat(pad)
        };
        Self {
            width,
            continuation,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// 续行占位串
    pub fn continuation(&self) -> &str {
        &self.continuation
    }

    /// 计算名称缩写：最后一段，去掉升级后缀，截断到 `width` 个字符再补一个空格
    pub fn shorten(&self, name: &str) -> ShortName {
        let start = name.rfind('.').map_or(0, |dot| dot + 1);
        let end = match ESCALATION_SUFFIXES.iter().find(|suffix| name.ends_with(*suffix)) {
            Some(suffix) => (name.len() - suffix.len()).max(start),
            None => name.len(),
        };

        let mut token: String = name[start..end].chars().take(self.width).collect();
        let visible = token.chars().count();
        token.extend(std::iter::repeat(' ').take(padded_len(self.width) - visible));

        ShortName {
            token,
            identity: identity_of(name),
        }
    }

    /// 选择本次输出使用的显示串：连续输出同一日志器时返回占位串
    pub fn render<'a>(&'a self, short: &'a ShortName, state: &ShortNameState) -> &'a str {
        if state.is_continuation(short.identity) {
            &self.continuation
        } else {
            &short.token
        }
    }
}

impl Default for NameColumn {
    fn default() -> Self {
        Self::new(conlog_config::DEFAULT_COLUMN_WIDTH)
    }
}

fn padded_len(width: usize) -> usize {
    if width == 0 {
        0
    } else {
        width + 1
    }
}

/// 名称身份散列；0 保留给"尚无输出"
fn identity_of(name: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    hasher.finish().max(1)
}
