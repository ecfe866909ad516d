//! 统一错误处理 - 配置校验错误和恢复建议
//!
//! 哈希表与排序的运行期操作都是全函数：查找不到返回 `None`，删除不到返回 `false`。
//! 只有构造期的配置校验会失败。

/// 哈希表可能发生的错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashTableError {
    #[error("无效配置: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("无效负载因子: {value} (允许范围: {min} .. {max})")]
    InvalidLoadFactor {
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("缩容阈值过小: {threshold} (最小: {minimum})")]
    ShrinkThresholdTooSmall {
        threshold: usize,
        minimum: usize,
    },
}

impl HashTableError {
    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfig { .. } => Some("检查配置参数"),
            Self::InvalidLoadFactor { .. } => Some("使用默认负载因子 0.75，或保证 min_load_factor * 2 <= max_load_factor"),
            Self::ShrinkThresholdTooSmall { .. } => Some("缩容阈值至少为最小容量 2"),
        }
    }
}
