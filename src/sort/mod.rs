//! 排序模块 - 三路划分快速排序
//!
//! 排序函数总是返回新的 `Vec`，调用方的输入不会被修改。

pub mod partition;
pub mod pivot;
pub mod quicksort;

pub use partition::partition_3way;
pub use pivot::PivotStrategy;
pub use quicksort::{SortReport, Sorter};

use crate::types::Element;

/// 随机枢轴快速排序，期望 O(n log n)
///
/// `seed` 为 `None` 时每次使用新的熵源。
pub fn randomized_sort<T: Element + Clone>(input: &[T], seed: Option<u64>) -> Vec<T> {
    Sorter::randomized(seed).sort(input)
}

/// 首元素枢轴快速排序
///
/// 有序或逆序输入上退化为 O(n²)，用于对比枢轴选择的影响。
pub fn deterministic_first_pivot_sort<T: Element + Clone>(input: &[T]) -> Vec<T> {
    Sorter::first_pivot().sort(input)
}

pub fn median_of_three_sort<T: Element + Clone>(input: &[T]) -> Vec<T> {
    Sorter::median_of_three().sort(input)
}

/// 相邻元素均满足 `a[i] <= a[i + 1]`
pub fn is_sorted<T: Element>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
