//! # lines 命令实现
//!
//! 按元素列出在给定束流能量与谱仪量程下可观测的特征谱线。
//!
//! ## 依赖关系
//! - 使用 `cli/lines.rs` 定义的参数
//! - 使用 `edstool::xray` 的数据库、谱线解析与导出
//! - 使用 `utils/output.rs`

use crate::cli::lines::LinesArgs;
use crate::utils::output;
use edstool::error::Result;
use edstool::xray::export::{self, LineRecord};
use edstool::xray::{BuiltinDatabase, LinePolicy, LineResolver};

use tabled::{Table, Tabled};

/// 谱线表格行
#[derive(Debug, Clone, Tabled)]
struct LineRow {
    #[tabled(rename = "Line")]
    line: String,
    #[tabled(rename = "Energy (keV)")]
    energy: String,
    #[tabled(rename = "Edge (keV)")]
    edge: String,
    #[tabled(rename = "Overvoltage")]
    overvoltage: String,
}

/// 执行 lines 命令
pub fn execute(args: LinesArgs) -> Result<()> {
    output::print_header("Observable X-Ray Lines");

    let db = BuiltinDatabase;
    let mut resolver = LineResolver::new(&db, args.beam_energy);
    if let Some(max_energy) = args.max_energy {
        resolver = resolver.with_max_energy(max_energy);
    }
    let policy = LinePolicy::new(args.one, !args.all_lines);

    output::print_info(&format!(
        "Beam energy {:.2} kV, energy limit {:.3} keV",
        args.beam_energy,
        resolver.energy_limit()
    ));

    let mut records = Vec::new();
    for element in &args.elements {
        let lines = resolver.resolve(element, policy)?;
        if lines.is_empty() {
            output::print_warning(&format!("{}: no observable line", element));
            continue;
        }
        for line in &lines {
            records.push(LineRecord::lookup(&db, line)?);
        }
    }

    if records.is_empty() {
        output::print_warning("No lines to report");
        return Ok(());
    }

    let rows: Vec<LineRow> = records
        .iter()
        .map(|r| LineRow {
            line: r.line.clone(),
            energy: format!("{:.4}", r.energy_kev),
            edge: format!("{:.4}", r.critical_energy_kev),
            overvoltage: format!("{:.2}", args.beam_energy / r.critical_energy_kev),
        })
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);

    if let Some(ref path) = args.output {
        export::lines_to_csv(&records, path)?;
        output::print_success(&format!("Line table saved to '{}'", path.display()));
    }

    Ok(())
}
