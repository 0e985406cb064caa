//! # lines 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/lines.rs`

use super::parse_positive;

use clap::Args;
use std::path::PathBuf;

/// lines 子命令参数
#[derive(Args, Debug)]
pub struct LinesArgs {
    /// Element symbols (e.g., Fe Ti Al)
    #[arg(required = true, num_args = 1..)]
    pub elements: Vec<String>,

    /// Beam energy in kV
    #[arg(short, long, default_value_t = 15.0, value_parser = parse_positive)]
    pub beam_energy: f64,

    /// Upper end of the recorded energy range in keV
    #[arg(short, long, value_parser = parse_positive)]
    pub max_energy: Option<f64>,

    /// Keep only one line per element
    #[arg(long, default_value_t = false)]
    pub one: bool,

    /// Include every line, not only Ka/La/Ma
    #[arg(long, default_value_t = false)]
    pub all_lines: bool,

    /// Export the line table to CSV
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
