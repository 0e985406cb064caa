//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `lines`: 元素的可观测特征谱线
//! - `range`: 电子射程与 X 射线射程
//! - `takeoff`: 探测器出射角
//! - `intensity`: 模拟谱图上的谱线强度积分
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: lines, range, takeoff, intensity

pub mod intensity;
pub mod lines;
pub mod range;
pub mod takeoff;

use clap::{Args, Parser, Subcommand};
use edstool::preferences::{EdsPreferences, Preferences};

/// edstool - 标定 EDS 谱信号工具
#[derive(Parser)]
#[command(name = "edstool")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Calibrated EDS spectrum toolkit: X-ray lines, ranges and line intensities",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// List the observable characteristic X-ray lines of elements
    Lines(lines::LinesArgs),

    /// Estimate electron penetration range and X-ray generation range
    Range(range::RangeArgs),

    /// Compute the detector take-off angle
    Takeoff(takeoff::TakeoffArgs),

    /// Integrate line intensities over a simulated spectrum image
    Intensity(intensity::IntensityArgs),
}

// ─────────────────────────────────────────────────────────────
// 共享的仪器参数
// ─────────────────────────────────────────────────────────────

/// 探测器与样品台参数（可由环境变量提供）
#[derive(Args, Debug, Clone)]
pub struct InstrumentArgs {
    /// Energy resolution at Mn Ka in eV
    #[arg(long = "mn-ka", env = "EDS_MN_KA", default_value_t = 130.0)]
    pub energy_resolution_mn_ka: f64,

    /// Stage tilt in degrees
    #[arg(
        long = "tilt",
        env = "EDS_TILT_STAGE",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub tilt_stage: f64,

    /// Detector azimuth angle in degrees
    #[arg(
        long = "azimuth",
        env = "EDS_AZIMUTH",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub azimuth_angle: f64,

    /// Detector elevation angle in degrees
    #[arg(
        long = "elevation",
        env = "EDS_ELEVATION",
        default_value_t = 35.0,
        allow_negative_numbers = true
    )]
    pub elevation_angle: f64,
}

impl InstrumentArgs {
    /// 组装默认参数
    pub fn preferences(&self) -> Preferences {
        Preferences {
            eds: EdsPreferences {
                energy_resolution_mn_ka: self.energy_resolution_mn_ka,
                tilt_stage: self.tilt_stage,
                azimuth_angle: self.azimuth_angle,
                elevation_angle: self.elevation_angle,
                ..EdsPreferences::default()
            },
        }
    }
}

/// 解析正数参数
pub fn parse_positive(input: &str) -> Result<f64, String> {
    match input.parse::<f64>() {
        Ok(v) if v > 0.0 && v.is_finite() => Ok(v),
        Ok(v) => Err(format!("Value must be positive, got {}", v)),
        Err(_) => Err(format!("Invalid number '{}'", input)),
    }
}
