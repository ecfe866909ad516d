//! 原始哈希策略 - 把任意可哈希键折叠为 64 位原始哈希值

use ahash::RandomState;
use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{BuildHasher, Hash, Hasher},
};

/// 原始哈希固定种子，保证同一张表内同一个键的原始哈希在扩缩容前后不变
pub const RAW_HASH_SEED: u64 = 42;

/// 哈希算法选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    AHash,
    XxHash,
    Default,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::AHash => "ahash",
            HashAlgorithm::XxHash => "xxhash64",
            HashAlgorithm::Default => "siphash",
        }
    }
}

/// 原始哈希器
///
/// 只负责 `key -> u64`，不涉及桶数量。桶定位由
/// [`UniversalHashStrategy`](crate::hash::UniversalHashStrategy) 完成。
#[derive(Clone)]
pub struct RawHasher {
    algorithm: HashAlgorithm,
    seed: u64,
    ahash_state: RandomState,
}

impl RawHasher {
    /// 使用默认种子创建
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self::with_seed(algorithm, RAW_HASH_SEED)
    }

    /// 使用指定种子创建
    pub fn with_seed(algorithm: HashAlgorithm, seed: u64) -> Self {
        Self {
            algorithm,
            seed,
            ahash_state: RandomState::with_seed(seed as usize),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// 计算键的原始哈希值
    pub fn hash_key<K: Hash + ?Sized>(&self, key: &K) -> u64 {
        match self.algorithm {
            HashAlgorithm::AHash => {
                let mut hasher = self.ahash_state.build_hasher();
                key.hash(&mut hasher);
                hasher.finish()
            }
            HashAlgorithm::XxHash => {
                let mut hasher = twox_hash::XxHash64::with_seed(self.seed);
                key.hash(&mut hasher);
                hasher.finish()
            }
            HashAlgorithm::Default => {
                let mut hasher = DefaultHasher::new();
                key.hash(&mut hasher);
                hasher.finish()
            }
        }
    }
}

impl Default for RawHasher {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}

impl fmt::Debug for RawHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawHasher")
            .field("algorithm", &self.algorithm.as_str())
            .field("seed", &self.seed)
            .finish()
    }
}
