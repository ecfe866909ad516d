//! 分离链接哈希表与三路快速排序
//!
//! 两个相互独立的基础组件：
//! - [`ChainedHashTable`]：分离链接 + 通用哈希，容量为二次幂，按负载因子自动扩缩容，
//!   每次扩缩容重新抽取哈希参数
//! - [`sort`]：三路划分快速排序，支持随机、首元素、三数取中枢轴，递归深度 O(log n)
//!
//! ## 快速开始
//!
//! ```rust
//! use chained_quicksort::*;
//!
//! fn main() {
//!     // 初始 4 个桶，最大负载因子 0.75，种子 123
//!     let mut table = ChainedHashTable::new(4, 0.75, 123);
//!
//!     table.insert("apple".to_string(), 10);
//!     table.insert("banana".to_string(), 20);
//!     table.insert("banana".to_string(), 99);
//!     assert_eq!(table.search("banana"), Some(&99));
//!
//!     assert!(!table.delete("orange"));
//!
//!     let sorted = randomized_sort(&[5, 4, 3, 2, 1], Some(42));
//!     assert!(is_sorted(&sorted));
//!
//!     println!("{:?}", table.stats());
//! }
//! ```

#![warn(clippy::all)]
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}

// 核心模块导出
pub mod error;
pub mod types;
pub mod hash;
pub mod map;
pub mod sort;
pub mod stats;

use std::{borrow::Borrow, hash::Hash};

// 公共接口导出
pub use crate::{
    map::{
        ChainedHashTable,
        HashTableConfig,
        HashTableStats,
        DEFAULT_CONFIG,
    },
    hash::{
        HashAlgorithm,
        UniversalHashParams,
        UniversalHashStrategy,
        next_power_of_two,
    },
    sort::{
        randomized_sort,
        deterministic_first_pivot_sort,
        median_of_three_sort,
        is_sorted,
        PivotStrategy,
        SortReport,
        Sorter,
    },
    stats::{
        StatsRecorder,
        DefaultStatsRecorder,
        DisabledStatsRecorder,
        StatsRecorderFactory,
    },
    error::HashTableError,
    types::{Key, Element, OperationType},
};

// 简化默认类型别名
pub type DefaultTable = ChainedHashTable<String, String>;

// 便捷功能函数

/// 批量插入，返回新插入（而非覆盖）的键数量
pub fn batch_insert<K: Key, V>(
    table: &mut ChainedHashTable<K, V>,
    items: impl IntoIterator<Item = (K, V)>,
) -> usize {
    let mut inserted = 0;
    for (k, v) in items {
        if table.insert(k, v).is_none() {
            inserted += 1;
        }
    }
    log_debug!("batch insert: {} new keys, table size {}", inserted, table.len());
    inserted
}

/// 批量查询，结果与键一一对应
pub fn batch_search<'a, K, V, Q>(
    table: &'a ChainedHashTable<K, V>,
    keys: impl IntoIterator<Item = &'a Q>,
) -> Vec<Option<&'a V>>
where
    K: Key + Borrow<Q>,
    Q: Hash + Eq + ?Sized + 'a,
{
    keys.into_iter().map(|k| table.search(k)).collect()
}
