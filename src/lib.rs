//! # edstool - 标定 EDS 谱信号模型
//!
//! 多维能量色散 X 射线谱（EDS）的数据模型: 带物理标定的坐标轴、
//! 区分 SEM/TEM 的元数据树，以及在切片、求和、重采样与类型转换下保持一致的信号。
//!
//! ## 模块结构
//! ```text
//! lib.rs
//!   ├── error.rs        (错误处理)
//!   ├── preferences.rs  (默认参数)
//!   ├── models/         (坐标轴、元数据)
//!   ├── signal/         (EDS 谱、降维、强度积分)
//!   └── xray/           (数据库、谱线解析、射程、峰形、导出)
//! ```

pub mod error;
pub mod models;
pub mod preferences;
pub mod signal;
pub mod xray;

pub use error::{EdsError, Result};
pub use models::{AxesManager, DataAxis, Metadata, SignalType};
pub use preferences::Preferences;
pub use signal::{EdsSpectrum, IntensityMap};
pub use xray::{LineId, LinePolicy};
