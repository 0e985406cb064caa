//! # 默认参数配置
//!
//! 构造信号时使用的仪器默认值。由调用方（CLI 或库使用者）显式创建并传入，
//! 不存在进程级的全局状态。
//!
//! ## 依赖关系
//! - 被 `models/metadata.rs`, `signal/spectrum.rs` 使用
//! - 被 `cli/` 由命令行参数/环境变量组装

use serde::{Deserialize, Serialize};

/// 全部默认参数
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub eds: EdsPreferences,
}

/// EDS 默认参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdsPreferences {
    /// Mn Kα 处的能量分辨率（eV）
    pub energy_resolution_mn_ka: f64,
    /// 样品台倾转角（度）
    pub tilt_stage: f64,
    /// 探测器方位角（度）
    pub azimuth_angle: f64,
    /// 探测器仰角（度）
    pub elevation_angle: f64,
    /// SEM 默认束流能量（kV）
    pub sem_beam_energy: f64,
    /// TEM 默认束流能量（kV）
    pub tem_beam_energy: f64,
}

impl Default for EdsPreferences {
    fn default() -> Self {
        Self {
            energy_resolution_mn_ka: 130.0,
            tilt_stage: 0.0,
            azimuth_angle: 0.0,
            elevation_angle: 35.0,
            sem_beam_energy: 15.0,
            tem_beam_energy: 200.0,
        }
    }
}
