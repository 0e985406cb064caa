//! # 数据模型模块
//!
//! 定义标定坐标轴与元数据树。
//!
//! ## 依赖关系
//! - 被 `signal/` 和 `commands/` 使用
//! - 子模块: axes, metadata

pub mod axes;
pub mod metadata;

pub use axes::{AxesManager, DataAxis};
pub use metadata::{
    EdsParameters, InstrumentBranch, Metadata, Sample, SemParameters, SignalType, TemParameters,
};
