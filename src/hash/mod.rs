//! 哈希模块 - 统一管理哈希相关功能

pub mod strategy;
pub mod universal;

pub use strategy::{HashAlgorithm, RawHasher};
pub use universal::{UniversalHashParams, UniversalHashStrategy, RAW_HASH_MASK, UNIVERSAL_PRIME};

/// 最小桶数量
pub const MIN_CAPACITY: usize = 2;

/// 返回不小于 `x` 的最小二次幂（至少为 [`MIN_CAPACITY`]）
///
/// 超过 `usize` 能表示的最大二次幂时饱和。
pub fn next_power_of_two(x: usize) -> usize {
    x.max(MIN_CAPACITY)
        .checked_next_power_of_two()
        .unwrap_or(1usize << (usize::BITS - 1))
}
