//! # takeoff 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/takeoff.rs` 定义的参数
//! - 使用 `edstool::xray::range::take_off_angle`

use crate::cli::takeoff::TakeoffArgs;
use crate::utils::output;
use edstool::error::Result;
use edstool::xray::range::take_off_angle;

/// 执行 takeoff 命令
pub fn execute(args: TakeoffArgs) -> Result<()> {
    let eds = args.instrument.preferences().eds;

    output::print_info(&format!(
        "Tilt {:.2}°, azimuth {:.2}°, elevation {:.2}°",
        eds.tilt_stage, eds.azimuth_angle, eds.elevation_angle
    ));

    let angle = take_off_angle(eds.tilt_stage, eds.azimuth_angle, eds.elevation_angle);
    output::print_result("Take-off angle", angle, "°");

    Ok(())
}
