//! 内存缓冲输出
//!
//! 保留最近 N 行格式化输出，满了丢弃最旧的。嵌入程序和测试用它读取输出。

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::logger::LogSink;
use crate::record::Record;

/// 缓冲区中的一条输出
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferedLine {
    pub record: Record,
    pub line: String,
}

/// 有界缓冲输出
#[derive(Debug)]
pub struct BufferSink {
    capacity: usize,
    entries: Mutex<VecDeque<BufferedLine>>,
    dropped: AtomicU64,
}

impl BufferSink {
    /// 创建缓冲区；容量至少为 1
    pub fn new(capacity: usize) -> Arc<Self> {
        let capacity = capacity.max(1);
        Arc::new(Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            dropped: AtomicU64::new(0),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// 因容量被丢弃的条数
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// 当前缓冲的格式化行（从旧到新）
    pub fn lines(&self) -> Vec<String> {
        self.entries().iter().map(|entry| entry.line.clone()).collect()
    }

    /// 当前缓冲的记录（从旧到新）
    pub fn records(&self) -> Vec<Record> {
        self.entries().iter().map(|entry| entry.record.clone()).collect()
    }

    /// 取出并清空
    pub fn drain(&self) -> Vec<BufferedLine> {
        self.entries().drain(..).collect()
    }

    fn entries(&self) -> MutexGuard<'_, VecDeque<BufferedLine>> {
        // 写入方 panic 不影响已缓冲的数据
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for BufferSink {
    fn write(&self, record: &Record, line: &str) {
        let mut entries = self.entries();
        if entries.len() == self.capacity {
            entries.pop_front();
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        entries.push_back(BufferedLine {
            record: record.clone(),
            line: line.to_string(),
        });
    }
}

impl LogSink for Arc<BufferSink> {
    fn write(&self, record: &Record, line: &str) {
        self.as_ref().write(record, line);
    }
}
