//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `edstool::signal`, `edstool::xray`, `utils/`
//! - 子模块: lines, range, takeoff, intensity

pub mod intensity;
pub mod lines;
pub mod range;
pub mod takeoff;

use crate::cli::Commands;
use edstool::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Lines(args) => lines::execute(args),
        Commands::Range(args) => range::execute(args),
        Commands::Takeoff(args) => takeoff::execute(args),
        Commands::Intensity(args) => intensity::execute(args),
    }
}
