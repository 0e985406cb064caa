//! # range 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/range.rs`

use super::parse_positive;

use clap::Args;
use edstool::xray::Density;

/// range 子命令参数
#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Element (e.g., Al) or X-ray line (e.g., Al_Ka)
    pub target: String,

    /// Beam energy in kV
    #[arg(short, long, value_parser = parse_positive)]
    pub beam_energy: f64,

    /// Density in g/cm³, or 'auto' for the tabulated value
    #[arg(short, long, default_value = "auto", value_parser = parse_density)]
    pub density: Density,

    /// Stage tilt in degrees (electron range only)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub tilt: f64,
}

/// 解析密度输入（"auto" 或数值）
pub fn parse_density(input: &str) -> Result<Density, String> {
    if input.eq_ignore_ascii_case("auto") {
        return Ok(Density::Auto);
    }
    parse_positive(input)
        .map(Density::Value)
        .map_err(|e| format!("{}. Use a number in g/cm³ or 'auto'", e))
}
