//! # edstool - EDS 谱线与射程工具
//!
//! 标定 EDS 谱信号模型的命令行入口。
//!
//! ## 子命令
//! - `lines`     - 按元素列出可观测特征谱线
//! - `range`     - 电子射程与 X 射线射程估算
//! - `takeoff`   - 探测器出射角
//! - `intensity` - 在模拟谱图上积分谱线强度
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── edstool::signal/ (EDS 谱信号)
//!   │     └── edstool::xray/   (X 射线物理)
//!   └── utils/      (工具函数)
//! ```

mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
