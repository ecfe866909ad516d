// src/map/chain.rs
//! 链表桶实现 - 每个桶保存一串键唯一的键值对

use crate::types::Entry;
use std::{borrow::Borrow, fmt, slice};

/// 单个桶：按插入顺序保存的键值对
#[derive(Clone, PartialEq, Eq)]
pub struct Chain<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Chain<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|e| (&e.key, &e.value)))
            .finish()
    }
}

impl<K, V> Chain<K, V> {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// 链长
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> slice::Iter<'_, Entry<K, V>> {
        self.entries.iter()
    }

    /// 按下标取条目
    pub fn entry_at(&self, idx: usize) -> Option<&Entry<K, V>> {
        self.entries.get(idx)
    }

    /// 直接追加，不检查重复键
    ///
    /// 只在调用方已经确认键不存在时使用（新键插入、扩缩容重放）。
    pub(crate) fn push(&mut self, key: K, value: V) {
        self.entries.push(Entry::new(key, value));
    }

    /// 消费桶，返回全部键值对
    pub fn into_pairs(self) -> impl Iterator<Item = (K, V)> {
        self.entries.into_iter().map(Entry::into_pair)
    }
}

impl<K: Eq, V> Chain<K, V> {
    /// 线性扫描查找键所在位置
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|e| e.key.borrow() == key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .find(|e| e.key.borrow() == key)
            .map(|e| &e.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter_mut()
            .find(|e| e.key.borrow() == key)
            .map(|e| &mut e.value)
    }

    /// 插入或覆盖
    ///
    /// 键已存在时原地覆盖值并返回旧值；否则追加到链尾。
    pub fn upsert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].value, value)),
            None => {
                self.push(key, value);
                None
            }
        }
    }

    /// 删除键，保持其余条目的相对顺序
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let idx = self.position(key)?;
        Some(self.entries.remove(idx).value)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_updates_in_place() {
        let mut chain = Chain::new();
        assert_eq!(chain.upsert("a", 1), None);
        assert_eq!(chain.upsert("b", 2), None);
        assert_eq!(chain.upsert("a", 10), Some(1));

        assert_eq!(chain.len(), 2, "更新不应增加链长");
        assert_eq!(chain.get("a"), Some(&10));
        // 覆盖后位置不变
        assert_eq!(chain.position("a"), Some(0));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut chain = Chain::new();
        for (i, k) in ["x", "y", "z"].iter().enumerate() {
            chain.upsert(*k, i);
        }
        assert_eq!(chain.remove("y"), Some(1));
        assert_eq!(chain.remove("y"), None);

        let keys: Vec<_> = chain.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["x", "z"]);
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut chain: Chain<String, u32> = Chain::new();
        chain.upsert("apple".to_string(), 10);
        assert_eq!(chain.get("apple"), Some(&10));
        if let Some(v) = chain.get_mut("apple") {
            *v += 1;
        }
        assert_eq!(chain.get("apple"), Some(&11));
        assert!(chain.get("grape").is_none());
    }

    #[test]
    fn test_into_pairs_in_order() {
        let mut chain = Chain::new();
        chain.upsert(1, "one");
        chain.upsert(2, "two");
        let pairs: Vec<_> = chain.into_pairs().collect();
        assert_eq!(pairs, vec![(1, "one"), (2, "two")]);
    }

    #[test]
    fn test_debug_output() {
        let mut chain = Chain::new();
        chain.upsert("k", 1);
        assert_eq!(format!("{:?}", chain), r#"{"k": 1}"#);
    }
}
