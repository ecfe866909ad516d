//! 统计模块 - 统一管理哈希表与排序的运行指标
//!
//! 记录器由每个实例显式持有，没有全局状态。

pub mod recorder;
pub mod operation;
pub mod resize;

pub use recorder::{StatsRecorder, DefaultStatsRecorder, DisabledStatsRecorder, StatsRecorderFactory};
pub use operation::{OperationRecorder, OperationStatsSnapshot, AtomicOperationStats};
pub use resize::{ResizeRecorder, ResizeSnapshot, ResizeAccumulatedSnapshot, ResizeStats};
