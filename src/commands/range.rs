//! # range 命令实现
//!
//! 估算电子射程与 X 射线产生范围。目标为元素时，列出其主线的 X 射线范围；
//! 目标为谱线时只给出该谱线。
//!
//! ## 依赖关系
//! - 使用 `cli/range.rs` 定义的参数
//! - 使用 `edstool::xray::range`
//! - 使用 `utils/output.rs`

use crate::cli::range::RangeArgs;
use crate::utils::output;
use edstool::error::Result;
use edstool::xray::range::{electron_range, xray_range};
use edstool::xray::{BuiltinDatabase, LineId, LinePolicy, LineResolver};

use tabled::{Table, Tabled};

/// 射程表格行
#[derive(Debug, Clone, Tabled)]
struct RangeRow {
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Range (µm)")]
    range: String,
}

/// 执行 range 命令
pub fn execute(args: RangeArgs) -> Result<()> {
    output::print_header("Electron and X-Ray Range");

    let db = BuiltinDatabase;
    let (element, lines) = if args.target.contains('_') {
        let line = LineId::parse(&args.target)?;
        (line.element().to_string(), vec![line])
    } else {
        let lines = LineResolver::new(&db, args.beam_energy)
            .resolve(&args.target, LinePolicy::default())?;
        (args.target.clone(), lines)
    };

    output::print_info(&format!(
        "{} at {:.2} kV, tilt {:.1}°",
        element, args.beam_energy, args.tilt
    ));

    let mut rows = vec![RangeRow {
        quantity: format!("Electron range ({})", element),
        range: format!(
            "{:.4}",
            electron_range(&db, &element, args.beam_energy, args.density, args.tilt)?
        ),
    }];

    if lines.is_empty() {
        output::print_warning(&format!(
            "{}: no line is excited at {:.2} kV",
            element, args.beam_energy
        ));
    }
    for line in &lines {
        rows.push(RangeRow {
            quantity: format!("X-ray range ({})", line),
            range: format!(
                "{:.4}",
                xray_range(&db, line, args.beam_energy, args.density)?
            ),
        });
    }

    let table = Table::new(&rows);
    println!("{}", table);

    Ok(())
}
