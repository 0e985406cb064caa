//! # EDS 信号模块
//!
//! 数据数组 + 坐标轴管理器 + 元数据树构成的标定信号。
//!
//! ## 子模块
//! - `spectrum`: 信号构造、标定、元素/谱线管理、信号类型切换
//! - `reduce`: 求和、重采样、索引切片
//! - `intensity`: 谱线强度积分
//!
//! ## 依赖关系
//! - 使用 `models/` 的坐标轴与元数据
//! - 使用 `xray/` 的数据库、谱线解析与峰宽公式
//! - 被 `commands/` 和库使用者调用

pub mod intensity;
pub mod reduce;
pub mod spectrum;

pub use intensity::IntensityMap;
pub use spectrum::EdsSpectrum;
