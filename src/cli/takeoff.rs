//! # takeoff 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/takeoff.rs`

use super::InstrumentArgs;

use clap::Args;

/// takeoff 子命令参数
#[derive(Args, Debug)]
pub struct TakeoffArgs {
    #[command(flatten)]
    pub instrument: InstrumentArgs,
}
