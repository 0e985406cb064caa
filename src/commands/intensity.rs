//! # intensity 命令实现
//!
//! 用高斯峰在每个采集位置构造模拟谱，把谱线写入样品元数据，
//! 再逐线积分得到强度图。峰宽由 Mn Kα 分辨率外推，峰面积沿第一个导航轴线性增加。
//!
//! ## 依赖关系
//! - 使用 `cli/intensity.rs` 定义的参数
//! - 使用 `edstool::signal`, `edstool::xray`
//! - 使用 `utils/output.rs`

use crate::cli::intensity::IntensityArgs;
use crate::utils::output;
use edstool::error::{EdsError, Result};
use edstool::signal::{EdsSpectrum, IntensityMap};
use edstool::xray::export;
use edstool::xray::range::fwhm_at_energy;
use edstool::xray::{BuiltinDatabase, Gaussian, LineId, LinePolicy, XrayDatabase};

use ndarray::{ArrayD, IxDyn};
use tabled::{Table, Tabled};

/// 强度表格行
#[derive(Debug, Clone, Tabled)]
struct IntensityRow {
    #[tabled(rename = "Line")]
    line: String,
    #[tabled(rename = "Energy (keV)")]
    energy: String,
    #[tabled(rename = "Window (keV)")]
    window: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Mean")]
    mean: String,
    #[tabled(rename = "Max")]
    max: String,
}

/// 执行 intensity 命令
pub fn execute(args: IntensityArgs) -> Result<()> {
    output::print_header("Line Intensity Integration");

    if args.channels == 0 {
        return Err(EdsError::InvalidArgument(
            "number of channels must be at least 1".to_string(),
        ));
    }

    let spectrum = build_spectrum(&args)?;
    output::print_info(&format!(
        "Simulated {:?} spectrum image, {} channels from {:.3} to {:.3} keV",
        spectrum.axes().navigation_shape(),
        args.channels,
        spectrum.energy_axis()?.low_value(),
        spectrum.energy_axis()?.high_value()
    ));
    output::print_info(&format!(
        "Lines: {}",
        spectrum.metadata.sample.line_list().join(", ")
    ));

    let maps = spectrum.get_lines_intensity(None, args.window_factor)?;

    let rows: Vec<IntensityRow> = maps.iter().map(summarize).collect();
    let table = Table::new(&rows);
    println!("{}", table);

    if let Some(ref path) = args.output {
        export::intensity_to_csv(&maps, path)?;
        output::print_success(&format!("Intensity maps saved to '{}'", path.display()));
    }

    Ok(())
}

/// 构造模拟谱图
fn build_spectrum(args: &IntensityArgs) -> Result<EdsSpectrum> {
    let prefs = args.instrument.preferences();
    let db = BuiltinDatabase;

    let mut shape = args.map.0.clone();
    shape.push(args.channels);
    let mut spectrum = EdsSpectrum::sem(ArrayD::zeros(IxDyn(&shape)), &prefs)?;
    spectrum.metadata.title = "Simulated map".to_string();
    spectrum.metadata.instrument_mut().set_beam_energy(args.beam_energy);
    let energy = spectrum.energy_axis_mut()?;
    *energy = energy
        .clone()
        .with_calibration(args.scale, args.offset)?
        .with_name("Energy", "keV");

    let requested: Vec<&str> = args.lines.iter().map(String::as_str).collect();
    spectrum.add_lines(&requested, LinePolicy::default())?;

    let mut peaks = Vec::with_capacity(requested.len());
    for line in &requested {
        let energy = db.line_energy(&LineId::parse(line)?)?.energy;
        let fwhm = fwhm_at_energy(&db, prefs.eds.energy_resolution_mn_ka, energy)?;
        peaks.push(Gaussian::from_fwhm(1.0, energy, fwhm));
    }

    let energies = spectrum.energy_axis()?.values();
    let rows = args.map.0.first().copied().unwrap_or(1) as f64;
    let last = shape.len() - 1;
    for (index, value) in spectrum.data_mut().indexed_iter_mut() {
        let weight = args.counts * (index[0] + 1) as f64 / rows;
        let energy = energies[index[last]];
        *value = weight * peaks.iter().map(|p| p.value(energy)).sum::<f64>();
    }

    Ok(spectrum)
}

/// 汇总单张强度图
fn summarize(map: &IntensityMap) -> IntensityRow {
    let values = map.data();
    let n = values.len().max(1) as f64;
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    IntensityRow {
        line: map.line.to_string(),
        energy: format!("{:.4}", map.energy),
        window: format!("{:.3} - {:.3}", map.window.0, map.window.1),
        min: format!("{:.2}", min),
        mean: format!("{:.2}", values.sum() / n),
        max: format!("{:.2}", max),
    }
}
