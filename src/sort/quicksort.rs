//! 三路快速排序
//!
//! 每轮划分后递归处理较短的一侧，较长的一侧在循环中继续，
//! 因此递归深度不超过 ⌊log₂ n⌋。

use crate::{
    sort::{partition::partition_3way, pivot::PivotStrategy},
    stats::recorder::StatsRecorder,
    types::{Element, OperationType},
};
use std::{fmt, sync::Arc};

/// 一次排序的诊断信息
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    /// 输入长度
    pub len: usize,
    /// 三路划分次数
    pub partitions: usize,
    /// 最大递归深度（顶层为 1，无需划分时为 0）
    pub max_depth: usize,
}

/// 快速排序器
pub struct Sorter {
    strategy: PivotStrategy,
    stats_recorder: Option<Arc<dyn StatsRecorder>>,
}

impl Sorter {
    pub fn new(strategy: PivotStrategy) -> Self {
        Self {
            strategy,
            stats_recorder: None,
        }
    }

    /// 随机枢轴
    pub fn randomized(seed: Option<u64>) -> Self {
        Self::new(PivotStrategy::random(seed))
    }

    /// 首元素枢轴
    pub fn first_pivot() -> Self {
        Self::new(PivotStrategy::FirstElement)
    }

    pub fn median_of_three() -> Self {
        Self::new(PivotStrategy::MedianOfThree)
    }

    /// 挂载统计记录器，记录 Sort / Partition 次数
    pub fn with_recorder(mut self, stats_recorder: Arc<dyn StatsRecorder>) -> Self {
        self.stats_recorder = Some(stats_recorder);
        self
    }

    pub fn strategy(&self) -> &PivotStrategy {
        &self.strategy
    }

    /// 返回排好序的副本，不修改输入
    pub fn sort<T: Element + Clone>(&mut self, input: &[T]) -> Vec<T> {
        let mut output = input.to_vec();
        self.sort_in_place(&mut output);
        output
    }

    /// 原地排序并返回诊断信息
    pub fn sort_in_place<T: Element>(&mut self, data: &mut [T]) -> SortReport {
        let mut report = SortReport {
            len: data.len(),
            ..SortReport::default()
        };

        self.quicksort(data, 1, &mut report);
        self.record(OperationType::Sort);

        log_debug!(
            "sorted {} elements with {} pivot: {} partitions, depth {}",
            report.len, self.strategy.name(), report.partitions, report.max_depth
        );
        report
    }

    fn quicksort<T: Element>(&mut self, mut window: &mut [T], depth: usize, report: &mut SortReport) {
        while window.len() > 1 {
            report.max_depth = report.max_depth.max(depth);

            let pivot = self.strategy.select(window);
            let (lt, gt) = partition_3way(window, pivot);
            report.partitions += 1;
            self.record(OperationType::Partition);

            // 等值区间 [lt, gt] 已就位
            let (left, rest) = std::mem::take(&mut window).split_at_mut(lt);
            let right = &mut rest[gt - lt + 1..];

            if left.len() < right.len() {
                self.quicksort(left, depth + 1, report);
                window = right;
            } else {
                self.quicksort(right, depth + 1, report);
                window = left;
            }
        }
    }

    fn record(&self, op_type: OperationType) {
        if let Some(recorder) = &self.stats_recorder {
            recorder.record_operation(op_type);
        }
    }
}

impl Default for Sorter {
    fn default() -> Self {
        Self::randomized(None)
    }
}

impl fmt::Debug for Sorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sorter")
            .field("strategy", &self.strategy)
            .field("stats_enabled", &self.stats_recorder.is_some())
            .finish()
    }
}
