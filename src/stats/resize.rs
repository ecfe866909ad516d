//! 扩缩容统计 - 跟踪重哈希的规模与耗时

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

/// 单次扩缩容详情
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSnapshot {
    pub old_capacity: usize,
    pub new_capacity: usize,
    pub rehashed_items: u64,
    pub duration: Duration,
}

impl ResizeSnapshot {
    /// 是否为扩容
    pub fn is_grow(&self) -> bool {
        self.new_capacity > self.old_capacity
    }
}

/// 扩缩容统计接口
pub trait ResizeRecorder: Send + Sync {
    /// 记录一次扩缩容
    fn record_resize(&self, stats: ResizeSnapshot);

    /// 获取累积快照
    fn snapshot(&self) -> ResizeAccumulatedSnapshot;

    /// 重置统计
    fn reset(&self);

    /// 导出Prometheus格式指标
    fn export_prometheus(&self) -> String;
}

/// 累积扩缩容统计
#[derive(Debug, Default)]
pub struct ResizeStats {
    grow_count: AtomicU64,
    shrink_count: AtomicU64,
    rehashed_items: AtomicU64,
    duration_sum: AtomicU64, // 纳秒
    peak_capacity: AtomicU64,
}

/// 累积统计快照
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResizeAccumulatedSnapshot {
    pub grow_count: u64,
    pub shrink_count: u64,
    pub rehashed_items: u64,
    pub duration_sum: Duration,
    pub peak_capacity: u64,
}

impl ResizeAccumulatedSnapshot {
    /// 扩缩容总次数
    pub fn total(&self) -> u64 {
        self.grow_count + self.shrink_count
    }
}

impl ResizeStats {
    /// 创建新统计
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResizeRecorder for ResizeStats {
    fn record_resize(&self, stats: ResizeSnapshot) {
        if stats.is_grow() {
            self.grow_count.fetch_add(1, Ordering::Relaxed);
        } else {
            self.shrink_count.fetch_add(1, Ordering::Relaxed);
        }

        self.rehashed_items.fetch_add(stats.rehashed_items, Ordering::Relaxed);
        self.duration_sum.fetch_add(stats.duration.as_nanos() as u64, Ordering::Relaxed);
        self.peak_capacity.fetch_max(stats.new_capacity as u64, Ordering::Relaxed);
    }

    fn snapshot(&self) -> ResizeAccumulatedSnapshot {
        ResizeAccumulatedSnapshot {
            grow_count: self.grow_count.load(Ordering::Relaxed),
            shrink_count: self.shrink_count.load(Ordering::Relaxed),
            rehashed_items: self.rehashed_items.load(Ordering::Relaxed),
            duration_sum: Duration::from_nanos(self.duration_sum.load(Ordering::Relaxed)),
            peak_capacity: self.peak_capacity.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.grow_count.store(0, Ordering::Relaxed);
        self.shrink_count.store(0, Ordering::Relaxed);
        self.rehashed_items.store(0, Ordering::Relaxed);
        self.duration_sum.store(0, Ordering::Relaxed);
        self.peak_capacity.store(0, Ordering::Relaxed);
    }

    fn export_prometheus(&self) -> String {
        let snapshot = self.snapshot();
        let mut output = String::new();

        output.push_str("# HELP chained_resize_grow_count Total grow operations\n");
        output.push_str("# TYPE chained_resize_grow_count counter\n");
        output.push_str(&format!("chained_resize_grow_count {}\n", snapshot.grow_count));

        output.push_str("# HELP chained_resize_shrink_count Total shrink operations\n");
        output.push_str("# TYPE chained_resize_shrink_count counter\n");
        output.push_str(&format!("chained_resize_shrink_count {}\n", snapshot.shrink_count));

        output.push_str("# HELP chained_resize_rehashed_items Total entries rehashed by resizes\n");
        output.push_str("# TYPE chained_resize_rehashed_items counter\n");
        output.push_str(&format!("chained_resize_rehashed_items {}\n", snapshot.rehashed_items));

        let total_duration = snapshot.duration_sum.as_secs_f64();
        output.push_str("# HELP chained_resize_duration_total Total resize duration (seconds)\n");
        output.push_str("# TYPE chained_resize_duration_total counter\n");
        output.push_str(&format!("chained_resize_duration_total {:.6}\n", total_duration));

        let avg_duration = if snapshot.total() > 0 {
            total_duration / snapshot.total() as f64
        } else {
            0.0
        };
        output.push_str("# HELP chained_resize_duration_avg Average resize duration (seconds)\n");
        output.push_str("# TYPE chained_resize_duration_avg gauge\n");
        output.push_str(&format!("chained_resize_duration_avg {:.6}\n", avg_duration));

        output.push_str("# HELP chained_resize_peak_capacity Largest bucket count reached\n");
        output.push_str("# TYPE chained_resize_peak_capacity gauge\n");
        output.push_str(&format!("chained_resize_peak_capacity {}\n", snapshot.peak_capacity));

        output
    }
}

/// 禁用扩缩容统计
#[derive(Debug, Default)]
pub struct DisabledResizeRecorder;

impl ResizeRecorder for DisabledResizeRecorder {
    fn record_resize(&self, _stats: ResizeSnapshot) {}
    fn snapshot(&self) -> ResizeAccumulatedSnapshot { ResizeAccumulatedSnapshot::default() }
    fn reset(&self) {}
    fn export_prometheus(&self) -> String { String::new() }
}
