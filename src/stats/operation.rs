//! 操作统计 - 跟踪哈希表与排序的操作次数

use crate::types::OperationType;
use std::sync::atomic::{AtomicU64, Ordering};

/// 操作统计接口
pub trait OperationRecorder: Send + Sync {
    /// 记录一次操作
    fn record(&self, op_type: OperationType);

    /// 记录查找结果（命中/未命中）
    fn record_search(&self, hit: bool);

    /// 获取操作统计快照
    fn snapshot(&self) -> OperationStatsSnapshot;

    /// 重置统计
    fn reset(&self);

    /// 导出Prometheus格式指标
    fn export_prometheus(&self) -> String;
}

/// 操作统计快照
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OperationStatsSnapshot {
    pub insert_count: u64,
    pub update_count: u64,
    pub search_count: u64,
    pub search_miss_count: u64,
    pub delete_count: u64,
    pub grow_count: u64,
    pub shrink_count: u64,
    pub sort_count: u64,
    pub partition_count: u64,
}

impl OperationStatsSnapshot {
    /// 按操作类型取计数
    pub fn count(&self, op_type: OperationType) -> u64 {
        match op_type {
            OperationType::Insert => self.insert_count,
            OperationType::Update => self.update_count,
            OperationType::Search => self.search_count,
            OperationType::Delete => self.delete_count,
            OperationType::Grow => self.grow_count,
            OperationType::Shrink => self.shrink_count,
            OperationType::Sort => self.sort_count,
            OperationType::Partition => self.partition_count,
        }
    }

    /// 查找命中率
    pub fn search_hit_rate(&self) -> f64 {
        if self.search_count == 0 {
            return 0.0;
        }
        (self.search_count - self.search_miss_count) as f64 / self.search_count as f64
    }
}

/// 原子操作统计
#[derive(Debug, Default)]
pub struct AtomicOperationStats {
    counts: [AtomicU64; OperationType::COUNT],
    search_miss_count: AtomicU64,
}

impl AtomicOperationStats {
    /// 创建新统计
    pub fn new() -> Self {
        Self::default()
    }

    fn load(&self, op_type: OperationType) -> u64 {
        self.counts[op_type.index()].load(Ordering::Relaxed)
    }
}

impl OperationRecorder for AtomicOperationStats {
    fn record(&self, op_type: OperationType) {
        self.counts[op_type.index()].fetch_add(1, Ordering::Relaxed);
    }

    fn record_search(&self, hit: bool) {
        self.record(OperationType::Search);
        if !hit {
            self.search_miss_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot {
            insert_count: self.load(OperationType::Insert),
            update_count: self.load(OperationType::Update),
            search_count: self.load(OperationType::Search),
            search_miss_count: self.search_miss_count.load(Ordering::Relaxed),
            delete_count: self.load(OperationType::Delete),
            grow_count: self.load(OperationType::Grow),
            shrink_count: self.load(OperationType::Shrink),
            sort_count: self.load(OperationType::Sort),
            partition_count: self.load(OperationType::Partition),
        }
    }

    fn reset(&self) {
        for counter in &self.counts {
            counter.store(0, Ordering::Relaxed);
        }
        self.search_miss_count.store(0, Ordering::Relaxed);
    }

    fn export_prometheus(&self) -> String {
        let mut output = String::new();

        for op in OperationType::ALL {
            output.push_str(&format!(
                "# HELP chained_operation_{}_count Total {} operations\n",
                op.as_str(), op.as_str()
            ));
            output.push_str(&format!(
                "# TYPE chained_operation_{}_count counter\n",
                op.as_str()
            ));
            output.push_str(&format!(
                "chained_operation_{}_count {}\n",
                op.as_str(), self.load(op)
            ));
        }

        output.push_str("# HELP chained_operation_search_miss_count Searches that found no key\n");
        output.push_str("# TYPE chained_operation_search_miss_count counter\n");
        output.push_str(&format!(
            "chained_operation_search_miss_count {}\n",
            self.search_miss_count.load(Ordering::Relaxed)
        ));

        output
    }
}

/// 禁用操作统计实现
#[derive(Debug, Default)]
pub struct DisabledOperationRecorder;

impl OperationRecorder for DisabledOperationRecorder {
    fn record(&self, _op_type: OperationType) {}
    fn record_search(&self, _hit: bool) {}
    fn snapshot(&self) -> OperationStatsSnapshot { OperationStatsSnapshot::default() }
    fn reset(&self) {}
    fn export_prometheus(&self) -> String { String::new() }
}
