//! # X 射线物理模块
//!
//! 元素/谱线数据库、谱线解析、射程与几何计算、峰形与导出。
//!
//! ## 子模块
//! - `database`: 内置元素与特征谱线表
//! - `lines`: 谱线标识与可观测谱线解析
//! - `range`: 电子射程、X 射线射程、出射角、峰宽
//! - `peak`: 高斯峰形
//! - `export`: CSV 导出
//!
//! ## 依赖关系
//! - 被 `signal/` 和 `commands/` 使用

pub mod database;
pub mod export;
pub mod lines;
pub mod peak;
pub mod range;

pub use database::{BuiltinDatabase, XrayDatabase};
pub use lines::{LineFamily, LineId, LinePolicy, LineResolver};
pub use peak::Gaussian;
pub use range::Density;
