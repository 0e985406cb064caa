//! # 结果导出
//!
//! 将谱线列表与强度图导出为 CSV。
//!
//! ## 格式
//! - 谱线: line, energy_keV, critical_energy_keV
//! - 强度: line, energy_keV, position, intensity（每个采集位置一行）
//!
//! ## 依赖关系
//! - 被 `commands/lines.rs`, `commands/intensity.rs` 调用
//! - 使用 `signal/intensity.rs` 的 IntensityMap 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{EdsError, Result};
use crate::signal::IntensityMap;
use crate::xray::database::XrayDatabase;
use crate::xray::lines::LineId;

use ndarray::Dimension;
use serde::Serialize;
use std::path::Path;

/// 谱线导出记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineRecord {
    pub line: String,
    #[serde(rename = "energy_keV")]
    pub energy_kev: f64,
    #[serde(rename = "critical_energy_keV")]
    pub critical_energy_kev: f64,
}

impl LineRecord {
    /// 从数据库查询谱线能量
    pub fn lookup<D: XrayDatabase + ?Sized>(db: &D, line: &LineId) -> Result<Self> {
        let energy = db.line_energy(line)?;
        Ok(Self {
            line: line.to_string(),
            energy_kev: energy.energy,
            critical_energy_kev: energy.critical_energy,
        })
    }
}

/// 导出谱线列表
pub fn lines_to_csv(records: &[LineRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(|e| EdsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出强度图
///
/// 位置写作以 `;` 分隔的导航坐标，无导航轴时为空。
pub fn intensity_to_csv(maps: &[IntensityMap], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["line", "energy_keV", "position", "intensity"])?;

    for map in maps {
        let line = map.line.to_string();
        let energy = format!("{:.4}", map.energy);
        for (index, value) in map.data().indexed_iter() {
            let position = index
                .slice()
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(";");
            wtr.write_record([
                line.as_str(),
                energy.as_str(),
                position.as_str(),
                format!("{:.6}", value).as_str(),
            ])?;
        }
    }

    wtr.flush().map_err(|e| EdsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
