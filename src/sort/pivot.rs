//! 枢轴选择策略

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;

/// 枢轴选择策略
///
/// 随机策略独占自己的随机源，不同排序实例互不影响。
pub enum PivotStrategy {
    /// 在窗口内均匀随机选取
    Random(StdRng),
    /// 总是选窗口首元素（有序或逆序输入退化为 O(n²)）
    FirstElement,
    /// 首、中、尾三者取中
    MedianOfThree,
}

impl PivotStrategy {
    /// 随机策略；`seed` 为 `None` 时从系统熵初始化
    pub fn random(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        PivotStrategy::Random(rng)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PivotStrategy::Random(_) => "random",
            PivotStrategy::FirstElement => "first",
            PivotStrategy::MedianOfThree => "median3",
        }
    }

    /// 在非空窗口中选取枢轴下标
    pub fn select<T: Ord>(&mut self, window: &[T]) -> usize {
        debug_assert!(!window.is_empty(), "pivot selection on empty window");
        match self {
            PivotStrategy::Random(rng) => rng.gen_range(0..window.len()),
            PivotStrategy::FirstElement => 0,
            PivotStrategy::MedianOfThree => median_of_three(window),
        }
    }
}

impl Default for PivotStrategy {
    fn default() -> Self {
        Self::random(None)
    }
}

impl fmt::Debug for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PivotStrategy").field(&self.name()).finish()
    }
}

fn median_of_three<T: Ord>(window: &[T]) -> usize {
    let (a, b, c) = (0, window.len() / 2, window.len() - 1);
    let (x, y, z) = (&window[a], &window[b], &window[c]);

    if (x <= y) == (y <= z) {
        b
    } else if (y <= x) == (x <= z) {
        a
    } else {
        c
    }
}
