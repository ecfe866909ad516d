// src/stats/recorder.rs
//! 统计记录器接口 - 定义统一统计API

use std::sync::Arc;

use crate::{
    stats::{
        operation::{AtomicOperationStats, DisabledOperationRecorder, OperationRecorder, OperationStatsSnapshot},
        resize::{DisabledResizeRecorder, ResizeAccumulatedSnapshot, ResizeRecorder, ResizeSnapshot, ResizeStats},
    },
    types::OperationType,
};

/// 统计记录器特征
pub trait StatsRecorder: Send + Sync {
    /// 记录操作计数
    fn record_operation(&self, op_type: OperationType);

    /// 记录查找结果
    fn record_search(&self, hit: bool);

    /// 记录一次扩缩容
    fn record_resize(&self, stats: ResizeSnapshot);

    /// 获取操作统计接口
    fn operation_stats(&self) -> &dyn OperationRecorder;

    /// 获取扩缩容统计接口
    fn resize_stats(&self) -> &dyn ResizeRecorder;

    /// 重置所有统计
    fn reset(&self) {
        self.operation_stats().reset();
        self.resize_stats().reset();
    }

    /// 导出Prometheus格式指标
    fn export_prometheus(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.operation_stats().export_prometheus());
        output.push_str(&self.resize_stats().export_prometheus());
        output
    }

    /// 获取操作统计快照
    fn operation_stats_snapshot(&self) -> OperationStatsSnapshot {
        self.operation_stats().snapshot()
    }

    /// 获取扩缩容统计快照
    fn resize_stats_snapshot(&self) -> ResizeAccumulatedSnapshot {
        self.resize_stats().snapshot()
    }
}

/// 默认统计记录器实现
#[derive(Debug, Default)]
pub struct DefaultStatsRecorder {
    operation: AtomicOperationStats,
    resize: ResizeStats,
}

impl DefaultStatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsRecorder for DefaultStatsRecorder {
    fn record_operation(&self, op_type: OperationType) {
        self.operation.record(op_type);
    }

    fn record_search(&self, hit: bool) {
        self.operation.record_search(hit);
    }

    fn record_resize(&self, stats: ResizeSnapshot) {
        let op_type = if stats.is_grow() { OperationType::Grow } else { OperationType::Shrink };
        self.operation.record(op_type);
        self.resize.record_resize(stats);
    }

    fn operation_stats(&self) -> &dyn OperationRecorder {
        &self.operation
    }

    fn resize_stats(&self) -> &dyn ResizeRecorder {
        &self.resize
    }
}

/// 禁用统计的记录器
#[derive(Debug, Default)]
pub struct DisabledStatsRecorder;

impl StatsRecorder for DisabledStatsRecorder {
    fn record_operation(&self, _op_type: OperationType) {}
    fn record_search(&self, _hit: bool) {}
    fn record_resize(&self, _stats: ResizeSnapshot) {}
    fn operation_stats(&self) -> &dyn OperationRecorder { &DisabledOperationRecorder }
    fn resize_stats(&self) -> &dyn ResizeRecorder { &DisabledResizeRecorder }
    fn reset(&self) {}
    fn export_prometheus(&self) -> String { String::new() }
}

/// 统计记录器工厂
pub struct StatsRecorderFactory;

impl StatsRecorderFactory {
    /// 创建默认记录器
    pub fn create_default() -> Arc<dyn StatsRecorder> {
        Arc::new(DefaultStatsRecorder::new())
    }

    /// 创建禁用统计的记录器
    pub fn create_disabled() -> Arc<dyn StatsRecorder> {
        Arc::new(DisabledStatsRecorder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_resize_records_operation() {
        let recorder = DefaultStatsRecorder::new();
        recorder.record_resize(ResizeSnapshot {
            old_capacity: 8,
            new_capacity: 16,
            rehashed_items: 6,
            duration: Duration::from_nanos(500),
        });
        recorder.record_resize(ResizeSnapshot {
            old_capacity: 16,
            new_capacity: 8,
            rehashed_items: 1,
            duration: Duration::from_nanos(100),
        });

        let ops = recorder.operation_stats_snapshot();
        assert_eq!(ops.grow_count, 1);
        assert_eq!(ops.shrink_count, 1);
        assert_eq!(recorder.resize_stats_snapshot().rehashed_items, 7);
    }

    #[test]
    fn test_reset_clears_everything() {
        let recorder = StatsRecorderFactory::create_default();
        recorder.record_operation(OperationType::Insert);
        recorder.record_search(false);
        recorder.reset();
        assert_eq!(recorder.operation_stats_snapshot(), OperationStatsSnapshot::default());
    }

    #[test]
    fn test_export_contains_both_sections() {
        let recorder = DefaultStatsRecorder::new();
        recorder.record_operation(OperationType::Insert);
        let metrics = recorder.export_prometheus();
        assert!(metrics.contains("chained_operation_insert_count 1"));
        assert!(metrics.contains("chained_resize_grow_count 0"));
    }

    #[test]
    fn test_disabled_recorder_is_silent() {
        let recorder = StatsRecorderFactory::create_disabled();
        recorder.record_operation(OperationType::Insert);
        assert_eq!(recorder.operation_stats_snapshot().insert_count, 0);
        assert!(recorder.export_prometheus().is_empty());
    }
}
