//! 通用哈希 - `((a * h + b) mod p) mod m`
//!
//! 每次扩缩容重新抽取 `(a, b)`，打散之前可能出现的聚集。

use crate::hash::strategy::{HashAlgorithm, RawHasher};
use rand::Rng;
use std::hash::Hash;

/// 大素数 p = 2^31 - 1
pub const UNIVERSAL_PRIME: u64 = 2_147_483_647;

/// 原始哈希掩码，保证参与混合的值非负且小于 2^31
pub const RAW_HASH_MASK: u64 = 0x7FFF_FFFF;

/// 通用哈希参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniversalHashParams {
    a: u64,
    b: u64,
}

impl UniversalHashParams {
    /// 指定参数；`a` 必须在 `[1, p-1]`，`b` 必须在 `[0, p-1]`
    pub fn with_parts(a: u64, b: u64) -> Option<Self> {
        if (1..UNIVERSAL_PRIME).contains(&a) && b < UNIVERSAL_PRIME {
            Some(Self { a, b })
        } else {
            None
        }
    }

    /// 随机抽取参数
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            a: rng.gen_range(1..UNIVERSAL_PRIME),
            b: rng.gen_range(0..UNIVERSAL_PRIME),
        }
    }

    pub fn a(&self) -> u64 {
        self.a
    }

    pub fn b(&self) -> u64 {
        self.b
    }

    pub fn prime(&self) -> u64 {
        UNIVERSAL_PRIME
    }

    /// 把原始哈希映射到 `[0, capacity)`
    ///
    /// a < 2^31 且掩码后的 h < 2^31，乘积加 b 不会溢出 u64。
    #[inline]
    pub fn bucket_index(&self, raw_hash: u64, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        let hk = raw_hash & RAW_HASH_MASK;
        let mixed = (self.a * hk + self.b) % UNIVERSAL_PRIME;
        (mixed % capacity as u64) as usize
    }
}

/// 桶定位策略：原始哈希器 + 当前通用哈希参数
#[derive(Debug, Clone)]
pub struct UniversalHashStrategy {
    raw: RawHasher,
    params: UniversalHashParams,
}

impl UniversalHashStrategy {
    /// 创建策略并抽取第一组参数
    pub fn new<R: Rng + ?Sized>(algorithm: HashAlgorithm, rng: &mut R) -> Self {
        Self {
            raw: RawHasher::new(algorithm),
            params: UniversalHashParams::draw(rng),
        }
    }

    /// 计算键所在的桶
    #[inline]
    pub fn locate<K: Hash + ?Sized>(&self, key: &K, capacity: usize) -> usize {
        self.params.bucket_index(self.raw.hash_key(key), capacity)
    }

    /// 重新抽取 `(a, b)`，原始哈希器保持不变
    pub fn redraw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> UniversalHashParams {
        self.params = UniversalHashParams::draw(rng);
        self.params
    }

    pub fn params(&self) -> UniversalHashParams {
        self.params
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.raw.algorithm()
    }
}
