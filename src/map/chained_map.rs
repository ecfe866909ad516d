//! 链式哈希表核心实现
//!
//! 分离链接 + 通用哈希。桶数量始终是二次幂；插入新键前保证插入后负载因子不超过
//! `max_load_factor`，删除后负载因子低于 `min_load_factor` 且容量大于缩容阈值时减半。
//! 每次扩缩容都重新抽取通用哈希参数并重放全部条目。

use crate::{
    error::HashTableError,
    hash::{next_power_of_two, HashAlgorithm, UniversalHashParams, UniversalHashStrategy, MIN_CAPACITY},
    map::{
        chain::Chain, DEFAULT_MAX_LOAD_FACTOR, DEFAULT_MIN_LOAD_FACTOR, DEFAULT_SHRINK_THRESHOLD,
        DEFAULT_CONFIG, MAX_INITIAL_CAPACITY, MIN_MAX_LOAD_FACTOR,
    },
    stats::{
        recorder::{DefaultStatsRecorder, StatsRecorder},
        resize::ResizeSnapshot,
    },
    types::{Key, OperationType},
};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    borrow::Borrow,
    fmt,
    hash::Hash,
    sync::Arc,
    time::Instant,
};

/// 哈希表配置
#[derive(Clone, Debug, PartialEq)]
pub struct HashTableConfig {
    /// 初始桶数量（向上取整到二次幂，至少为 2）
    pub initial_capacity: usize,
    pub max_load_factor: f64,
    pub min_load_factor: f64,
    /// 容量大于该值时才允许缩容
    pub shrink_threshold: usize,
    /// 通用哈希参数的随机种子
    pub seed: u64,
    pub hash_algorithm: HashAlgorithm,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 8,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            min_load_factor: DEFAULT_MIN_LOAD_FACTOR,
            shrink_threshold: DEFAULT_SHRINK_THRESHOLD,
            seed: 123,
            hash_algorithm: HashAlgorithm::AHash,
        }
    }
}

impl HashTableConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    pub fn with_min_load_factor(mut self, min_load_factor: f64) -> Self {
        self.min_load_factor = min_load_factor;
        self
    }

    pub fn with_shrink_threshold(mut self, shrink_threshold: usize) -> Self {
        self.shrink_threshold = shrink_threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_hash_algorithm(mut self, hash_algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = hash_algorithm;
        self
    }

    /// 校验配置
    ///
    /// 缩容后负载因子最多翻倍，因此要求 `min_load_factor * 2 <= max_load_factor`，
    /// 否则缩容后的下一次插入会立即扩容。
    pub fn validate(&self) -> Result<(), HashTableError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(HashTableError::InvalidConfig {
                reason: format!(
                    "initial_capacity {} exceeds {}",
                    self.initial_capacity, MAX_INITIAL_CAPACITY
                ),
            });
        }

        if !self.max_load_factor.is_finite() || self.max_load_factor < MIN_MAX_LOAD_FACTOR {
            return Err(HashTableError::InvalidLoadFactor {
                value: self.max_load_factor,
                min: MIN_MAX_LOAD_FACTOR,
                max: f64::INFINITY,
            });
        }

        let min_upper = self.max_load_factor / 2.0;
        if !(0.0..=min_upper).contains(&self.min_load_factor) {
            return Err(HashTableError::InvalidLoadFactor {
                value: self.min_load_factor,
                min: 0.0,
                max: min_upper,
            });
        }

        if self.shrink_threshold < MIN_CAPACITY {
            return Err(HashTableError::ShrinkThresholdTooSmall {
                threshold: self.shrink_threshold,
                minimum: MIN_CAPACITY,
            });
        }

        Ok(())
    }
}

/// 哈希表统计信息
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HashTableStats {
    pub size: usize,
    pub capacity: usize,
    pub load_factor: f64,
    pub longest_chain: usize,
    pub empty_buckets: usize,
    pub insert_count: u64,
    pub update_count: u64,
    pub search_count: u64,
    pub delete_count: u64,
    pub grow_count: u64,
    pub shrink_count: u64,
}

/// 链式哈希表
pub struct ChainedHashTable<K, V> {
    buckets: Vec<Chain<K, V>>,

    // 当前条目数 n
    size: usize,

    config: HashTableConfig,

    // 原始哈希 + (a, b)
    hasher: UniversalHashStrategy,

    // 每张表独占的随机源，只用于抽取 (a, b)
    rng: StdRng,

    stats_recorder: Arc<dyn StatsRecorder>,
}

impl<K: Key, V> ChainedHashTable<K, V> {
    /// 创建新哈希表
    ///
    /// 不会失败：非有限值或小于 [`MIN_MAX_LOAD_FACTOR`] 的 `max_load_factor`
    /// 回退到默认值 0.75。缩容下界固定为 0.20。
    pub fn new(initial_capacity: usize, max_load_factor: f64, seed: u64) -> Self {
        let defaults = DEFAULT_CONFIG.clone();
        let max_load_factor = if max_load_factor.is_finite() && max_load_factor >= MIN_MAX_LOAD_FACTOR {
            max_load_factor
        } else {
            log_warn!(
                "invalid max_load_factor {}, falling back to {}",
                max_load_factor, defaults.max_load_factor
            );
            defaults.max_load_factor
        };

        let config = HashTableConfig {
            initial_capacity: initial_capacity.min(MAX_INITIAL_CAPACITY),
            max_load_factor,
            seed,
            ..defaults
        };
        Self::build(config)
    }

    /// 使用完整配置创建，配置非法时返回错误
    pub fn with_config(config: HashTableConfig) -> Result<Self, HashTableError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: HashTableConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let hasher = UniversalHashStrategy::new(config.hash_algorithm, &mut rng);
        let capacity = next_power_of_two(config.initial_capacity);

        log_debug!(
            "chained table created: capacity={}, max_load_factor={}, algorithm={}",
            capacity, config.max_load_factor, config.hash_algorithm.as_str()
        );

        Self {
            buckets: Self::empty_buckets(capacity),
            size: 0,
            config,
            hasher,
            rng,
            stats_recorder: Arc::new(DefaultStatsRecorder::new()),
        }
    }

    /// 替换统计记录器
    pub fn with_recorder(mut self, stats_recorder: Arc<dyn StatsRecorder>) -> Self {
        self.stats_recorder = stats_recorder;
        self
    }

    fn empty_buckets(capacity: usize) -> Vec<Chain<K, V>> {
        (0..capacity).map(|_| Chain::new()).collect()
    }

    /// 条目数 n
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// 桶数量 m
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// 负载因子 α = n / m
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    pub fn max_load_factor(&self) -> f64 {
        self.config.max_load_factor
    }

    pub fn config(&self) -> &HashTableConfig {
        &self.config
    }

    /// 当前通用哈希参数
    pub fn hash_params(&self) -> UniversalHashParams {
        self.hasher.params()
    }

    #[inline]
    fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        self.hasher.locate(key, self.capacity())
    }

    /// 插入或更新键值对
    ///
    /// 键已存在时原地覆盖并返回旧值，`n` 与容量都不变。新键插入前若
    /// `(n + 1) / m` 会超过 `max_load_factor`，先扩容。
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut idx = self.bucket_index(&key);
        let is_new = self.buckets[idx].position(&key).is_none();

        if is_new && self.exceeds_max_load(self.size + 1, self.capacity()) {
            self.grow();
            idx = self.bucket_index(&key);
        }

        let old = self.buckets[idx].upsert(key, value);
        if old.is_none() {
            self.size += 1;
            self.stats_recorder.record_operation(OperationType::Insert);
        } else {
            self.stats_recorder.record_operation(OperationType::Update);
        }
        old
    }

    /// 查找键对应的值
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.buckets[self.bucket_index(key)].get(key);
        self.stats_recorder.record_search(value.is_some());
        value
    }

    /// 获取值的可变引用
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx].get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)].position(key).is_some()
    }

    /// 删除键，返回是否发生了删除
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// 删除键并返回其值
    ///
    /// 删除后若负载因子低于 `min_load_factor` 且容量大于缩容阈值，容量减半，
    /// 必要时连续减半，直到满足下界或到达阈值。
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let value = self.buckets[idx].remove(key)?;
        self.size -= 1;
        self.stats_recorder.record_operation(OperationType::Delete);
        self.shrink_if_sparse();
        Some(value)
    }

    /// 清空所有条目，容量回到初始值
    pub fn clear(&mut self) {
        let capacity = next_power_of_two(self.config.initial_capacity);
        self.buckets = Self::empty_buckets(capacity);
        self.size = 0;
        self.hasher.redraw(&mut self.rng);
    }

    /// 遍历所有键值对（顺序由桶位置决定）
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: &self.buckets,
            bucket_index: 0,
            entry_index: 0,
            remaining: self.size,
        }
    }

    /// 每个桶的链长
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Chain::len).collect()
    }

    /// 最长链长度
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Chain::len).max().unwrap_or(0)
    }

    /// 获取统计信息
    pub fn stats(&self) -> HashTableStats {
        let ops = self.stats_recorder.operation_stats_snapshot();
        HashTableStats {
            size: self.size,
            capacity: self.capacity(),
            load_factor: self.load_factor(),
            longest_chain: self.longest_chain(),
            empty_buckets: self.buckets.iter().filter(|c| c.is_empty()).count(),
            insert_count: ops.insert_count,
            update_count: ops.update_count,
            search_count: ops.search_count,
            delete_count: ops.delete_count,
            grow_count: ops.grow_count,
            shrink_count: ops.shrink_count,
        }
    }

    /// 导出Prometheus格式指标
    pub fn export_prometheus(&self) -> String {
        self.stats_recorder.export_prometheus()
    }

    fn exceeds_max_load(&self, entries: usize, capacity: usize) -> bool {
        entries as f64 / capacity as f64 > self.config.max_load_factor
    }

    /// 扩容：翻倍，直到再放入一个新键也不超过上限
    fn grow(&mut self) {
        let needed = self.size + 1;
        let mut target = self.capacity().saturating_mul(2);
        while self.exceeds_max_load(needed, target) && target < usize::MAX / 2 {
            target *= 2;
        }
        self.resize(target);
    }

    fn shrink_if_sparse(&mut self) {
        let mut target = self.capacity();
        while target > self.config.shrink_threshold
            && (self.size as f64 / target as f64) < self.config.min_load_factor
        {
            target /= 2;
        }

        if target < self.capacity() {
            self.resize(target);
        }
    }

    /// 扩缩容并重放全部条目
    ///
    /// 重放走 `place`，不做负载检查，因此不会在重放中再次触发扩缩容。
    fn resize(&mut self, requested: usize) {
        let start = Instant::now();
        let old_capacity = self.capacity();
        let new_capacity = next_power_of_two(requested);

        let old_buckets = std::mem::replace(&mut self.buckets, Self::empty_buckets(new_capacity));
        let params = self.hasher.redraw(&mut self.rng);

        let rehashed = self.size;
        self.size = 0;
        for chain in old_buckets {
            for (key, value) in chain.into_pairs() {
                self.place(key, value);
            }
        }
        debug_assert_eq!(self.size, rehashed, "resize lost entries");

        log_debug!(
            "resized {} -> {} buckets, rehashed {} entries, a={}, b={}",
            old_capacity, new_capacity, rehashed, params.a(), params.b()
        );

        self.stats_recorder.record_resize(ResizeSnapshot {
            old_capacity,
            new_capacity,
            rehashed_items: rehashed as u64,
            duration: start.elapsed(),
        });
    }

    /// 把确认不存在的键直接放入所属桶
    fn place(&mut self, key: K, value: V) {
        let idx = self.bucket_index(&key);
        self.buckets[idx].push(key, value);
        self.size += 1;
    }
}

impl<K: Key, V> Default for ChainedHashTable<K, V> {
    fn default() -> Self {
        Self::build(DEFAULT_CONFIG.clone())
    }
}

impl<K: Key + fmt::Debug, V: fmt::Debug> fmt::Debug for ChainedHashTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("load_factor", &self.load_factor())
            .field("algorithm", &self.hasher.algorithm().as_str())
            .field("hash_params", &self.hasher.params())
            .finish()
    }
}

impl<K: Key, V> FromIterator<(K, V)> for ChainedHashTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<K: Key, V> Extend<(K, V)> for ChainedHashTable<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Key, V> IntoIterator for &'a ChainedHashTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 哈希表迭代器
pub struct Iter<'a, K, V> {
    buckets: &'a [Chain<K, V>],
    bucket_index: usize,
    entry_index: usize,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bucket = self.buckets.get(self.bucket_index)?;

            if let Some(entry) = bucket.entry_at(self.entry_index) {
                self.entry_index += 1;
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }

            // 当前桶遍历完毕，转到下一个桶
            self.bucket_index += 1;
            self.entry_index = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
