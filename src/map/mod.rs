//! 哈希表核心模块 - 实现链式哈希表及其组件

pub mod chain;
pub mod chained_map;

pub use chain::Chain;
pub use chained_map::{ChainedHashTable, HashTableConfig, HashTableStats, Iter};

use once_cell::sync::Lazy;

/// 全局默认配置
pub static DEFAULT_CONFIG: Lazy<HashTableConfig> = Lazy::new(HashTableConfig::default);

// 预定义的负载因子常量
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;
pub const DEFAULT_MIN_LOAD_FACTOR: f64 = 0.20;
pub const DEFAULT_SHRINK_THRESHOLD: usize = 8;

/// `max_load_factor` 下限，扩容目标随之受 `n / MIN_MAX_LOAD_FACTOR` 约束
pub const MIN_MAX_LOAD_FACTOR: f64 = 0.1;

/// 初始桶数量上限
pub const MAX_INITIAL_CAPACITY: usize = 1 << 30;
