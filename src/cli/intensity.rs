//! # intensity 子命令 CLI 定义
//!
//! 在高斯峰构成的模拟谱图上积分谱线强度。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/intensity.rs`

use super::{parse_positive, InstrumentArgs};

use clap::Args;
use std::path::PathBuf;

/// intensity 子命令参数
#[derive(Args, Debug)]
pub struct IntensityArgs {
    /// X-ray lines to place in the spectrum and integrate (e.g., Al_Ka Fe_La)
    #[arg(required = true, num_args = 1..)]
    pub lines: Vec<String>,

    /// Beam energy in kV
    #[arg(short, long, default_value_t = 15.0, value_parser = parse_positive)]
    pub beam_energy: f64,

    /// Navigation shape of the simulated map (e.g., "4x3"; "1" for a single spectrum)
    #[arg(long, default_value = "4x4", value_parser = parse_shape)]
    pub map: MapShape,

    /// Number of energy channels
    #[arg(long, default_value_t = 1024)]
    pub channels: usize,

    /// Energy per channel in keV
    #[arg(long, default_value_t = 0.01, value_parser = parse_positive)]
    pub scale: f64,

    /// Energy of the first channel in keV
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset: f64,

    /// Integrated counts under each simulated peak
    #[arg(long, default_value_t = 1000.0, value_parser = parse_positive)]
    pub counts: f64,

    /// Integration window in units of the line FWHM
    #[arg(short, long, default_value_t = 3.0, value_parser = parse_positive)]
    pub window_factor: f64,

    /// Export the intensity maps to CSV
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub instrument: InstrumentArgs,
}

/// 模拟谱图的导航形状
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapShape(pub Vec<usize>);

/// 解析导航形状 "AxB"
pub fn parse_shape(input: &str) -> Result<MapShape, String> {
    input
        .split(['x', 'X'])
        .map(|part| match part.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!(
                "Invalid map shape '{}'. Use sizes separated by 'x' (e.g., 4x3)",
                input
            )),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(MapShape)
}
