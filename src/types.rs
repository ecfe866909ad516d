//! 核心类型定义 - 共享类型和接口

use std::hash::Hash;

/// 键特征 - 链表查找需要相等比较，桶定位需要哈希
pub trait Key: Hash + Eq {}

impl<T: Hash + Eq + ?Sized> Key for T {}

/// 排序元素特征 - 要求全序
pub trait Element: Ord {}

impl<T: Ord + ?Sized> Element for T {}

/// 单条键值对
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// 拆分为元组
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// 插入新键
    Insert,
    /// 覆盖已有键的值
    Update,
    /// 查找操作
    Search,
    /// 删除操作
    Delete,
    /// 扩容 (容量翻倍)
    Grow,
    /// 缩容 (容量减半)
    Shrink,
    /// 一次完整排序
    Sort,
    /// 一次三路划分
    Partition,
}

impl OperationType {
    /// 操作类型数量
    pub const COUNT: usize = 8;

    /// 所有操作类型，按导出顺序排列
    pub const ALL: [OperationType; Self::COUNT] = [
        OperationType::Insert,
        OperationType::Update,
        OperationType::Search,
        OperationType::Delete,
        OperationType::Grow,
        OperationType::Shrink,
        OperationType::Sort,
        OperationType::Partition,
    ];

    /// 判断是否为读操作
    pub fn is_read(&self) -> bool {
        matches!(self, OperationType::Search)
    }

    /// 判断是否为写操作
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            OperationType::Insert | OperationType::Update | OperationType::Delete |
            OperationType::Grow | OperationType::Shrink
        )
    }

    /// 判断是否为调整容量操作
    pub fn is_resize(&self) -> bool {
        matches!(self, OperationType::Grow | OperationType::Shrink)
    }

    /// 转换为字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Insert => "insert",
            OperationType::Update => "update",
            OperationType::Search => "search",
            OperationType::Delete => "delete",
            OperationType::Grow => "grow",
            OperationType::Shrink => "shrink",
            OperationType::Sort => "sort",
            OperationType::Partition => "partition",
        }
    }

    /// 在 `ALL` 中的下标，用于计数器数组
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}
